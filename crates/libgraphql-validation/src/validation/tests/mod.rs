mod ast_walker_tests;
mod no_fragment_cycles_tests;
mod reachability_rule_tests;
mod uniqueness_rule_tests;
