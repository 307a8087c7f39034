use std::fmt::Write;

pub const SCHEMA: &str = include_str!("schema.graphql");
pub const DASHBOARD_QUERY: &str = include_str!("dashboard_query.graphql");

/// Generates a document whose single query spreads `count` fragments, all
/// selecting overlapping fields of `Order`. Every pair of fragments has to be
/// compared when checking that fields can be merged.
pub fn overlapping_fragments(count: usize) -> String {
    let mut out = String::with_capacity(count * 120);
    out.push_str("query Overlapping {\n  orders {\n");
    for i in 0..count {
        writeln!(out, "    ...Order{i}").unwrap();
    }
    out.push_str("  }\n}\n");
    for i in 0..count {
        writeln!(out, "fragment Order{i} on Order {{").unwrap();
        out.push_str("  id\n  status\n  customer { id name }\n");
        writeln!(out, "  items {{ quantity product {{ id }} }}\n}}").unwrap();
    }
    out
}

/// Generates a document with `count` operations, each declaring and using
/// its own variables.
pub fn many_operations(count: usize) -> String {
    let mut out = String::with_capacity(count * 100);
    for i in 0..count {
        writeln!(out, "query Operation{i}($id: ID!, $first: Int) {{").unwrap();
        out.push_str("  customer(id: $id) {\n    name\n");
        out.push_str("    orders(first: $first) { id totalCents }\n  }\n}\n");
    }
    out
}

/// Generates a chain of `depth` fragments, each spreading the next.
pub fn fragment_chain(depth: usize) -> String {
    let mut out = String::with_capacity(depth * 60);
    out.push_str("{ customer(id: 1) { ...Link0 } }\n");
    for i in 0..depth {
        if i + 1 < depth {
            writeln!(out, "fragment Link{i} on Customer {{ id ...Link{} }}", i + 1).unwrap();
        } else {
            writeln!(out, "fragment Link{i} on Customer {{ id name }}").unwrap();
        }
    }
    out
}
