//! "Did you mean ...?" suggestions for names that failed to resolve.

/// Maximum number of entries [`quoted_or_list`] renders.
const MAX_LIST_ITEMS: usize = 5;

/// Edit distance between two strings, counting insertion, deletion,
/// substitution, and transposition of two adjacent characters as one edit
/// each.
pub fn lexical_distance(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let mut d = vec![vec![0usize; b.len() + 1]; a.len() + 1];

    for (i, row) in d.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=b.len() {
        d[0][j] = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            d[i][j] = (d[i - 1][j] + 1)
                .min(d[i][j - 1] + 1)
                .min(d[i - 1][j - 1] + cost);

            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                d[i][j] = d[i][j].min(d[i - 2][j - 2] + cost);
            }
        }
    }

    d[a.len()][b.len()]
}

/// Filters `options` down to those plausibly intended by `input`, closest
/// first.
///
/// An option is kept when its distance from `input` is no more than half
/// the length of the longer of the two. Options at equal distance keep
/// their original relative order.
pub fn suggestion_list<'o>(
    input: &str,
    options: impl IntoIterator<Item = &'o str>,
) -> Vec<&'o str> {
    let input_len = input.chars().count() as f64;
    let mut scored: Vec<(usize, &'o str)> = options.into_iter()
        .filter_map(|option| {
            let distance = lexical_distance(input, option);
            let threshold = (input_len / 2.0).max(option.chars().count() as f64 / 2.0);
            if distance as f64 <= threshold {
                Some((distance, option))
            } else {
                None
            }
        })
        .collect();
    scored.sort_by_key(|(distance, _)| *distance);
    scored.into_iter().map(|(_, option)| option).collect()
}

/// Renders up to five items as an English "or" list of quoted strings:
/// `"A"`, `"A" or "B"`, `"A", "B", or "C"`.
pub fn quoted_or_list<S: AsRef<str>>(items: &[S]) -> String {
    let selected = &items[..items.len().min(MAX_LIST_ITEMS)];
    let separator = if selected.len() > 2 { ", " } else { " " };
    let mut out = String::new();
    for (i, item) in selected.iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
            if i == selected.len() - 1 {
                out.push_str("or ");
            }
        }
        out.push('"');
        out.push_str(item.as_ref());
        out.push('"');
    }
    out
}

/// A message suffix of the form ` Did you mean "A" or "B"?`, or an empty
/// string when there is nothing to suggest.
pub fn did_you_mean<S: AsRef<str>>(suggestions: &[S]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" Did you mean {}?", quoted_or_list(suggestions))
    }
}
