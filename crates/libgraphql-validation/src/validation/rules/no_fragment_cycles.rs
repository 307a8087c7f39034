use crate::ast;
use crate::validation::AstNodeKind;
use crate::validation::AstNodeRef;
use crate::validation::Rule;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use std::collections::HashMap;
use std::collections::HashSet;

/// A fragment must not spread itself, directly or through other
/// fragments.
///
/// Each fragment's spreads are explored once (depth-first); a spread of a
/// fragment already on the current spread path is reported with the part
/// of the path that forms the cycle.
#[derive(Debug, Default)]
pub struct NoFragmentCycles<'a> {
    spread_path: Vec<&'a ast::operation::FragmentSpread>,
    spread_path_index_by_name: HashMap<&'a str, usize>,
    visited_fragments: HashSet<&'a str>,
}
impl<'a> NoFragmentCycles<'a> {
    fn detect_cycles(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        fragment: &'a ast::operation::FragmentDefinition,
    ) {
        let fragment_name = fragment.name.as_str();
        self.visited_fragments.insert(fragment_name);

        let spreads = ctx.fragment_spreads(&fragment.selection_set);
        if spreads.is_empty() {
            return;
        }

        self.spread_path_index_by_name.insert(fragment_name, self.spread_path.len());
        for spread in spreads {
            let spread_name = spread.fragment_name.as_str();
            match self.spread_path_index_by_name.get(spread_name).copied() {
                None => {
                    self.spread_path.push(spread);
                    if !self.visited_fragments.contains(spread_name)
                        && let Some(spread_fragment) = ctx.fragment(spread_name) {
                        self.detect_cycles(ctx, spread_fragment);
                    }
                    self.spread_path.pop();
                },

                Some(cycle_index) => {
                    let cycle_path = &self.spread_path[cycle_index..];
                    let via = if cycle_path.is_empty() {
                        String::new()
                    } else {
                        let names: Vec<String> = cycle_path.iter()
                            .map(|s| format!("\"{}\"", s.fragment_name))
                            .collect();
                        format!(" via {}", names.join(", "))
                    };
                    let nodes = cycle_path.iter()
                        .chain(std::iter::once(&spread))
                        .map(|s| AstNodeRef::new(AstNodeKind::FragmentSpread, s.position))
                        .collect();
                    ctx.report(
                        ValidationRule::NoFragmentCycles,
                        format!("Cannot spread fragment \"{spread_name}\" within itself{via}."),
                        nodes,
                    );
                },
            }
        }
        self.spread_path_index_by_name.remove(fragment_name);
    }
}
impl<'a> Rule<'a> for NoFragmentCycles<'a> {
    fn enter_fragment_definition(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        fragment: &'a ast::operation::FragmentDefinition,
    ) {
        if !self.visited_fragments.contains(fragment.name.as_str()) {
            self.detect_cycles(ctx, fragment);
        }
    }
}
