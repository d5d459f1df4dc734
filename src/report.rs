//! Ranking of the frequency table into the final report.

use crate::frequency::FrequencyTable;

/// Return the `n` most frequent resources from `table`.
///
/// Ordering is count descending, tie-broken by resource name ascending,
/// case-insensitive. Keys are unique in the table, so the ordering is total
/// and deterministic. Fewer than `n` entries are returned when the table is
/// smaller; an empty table yields an empty report.
pub fn top_n(table: &FrequencyTable, n: usize) -> Vec<String> {
    let mut entries = table.counts();
    entries.sort_by(|(a_resource, a_count), (b_resource, b_count)| {
        b_count
            .cmp(a_count)
            .then_with(|| a_resource.to_lowercase().cmp(&b_resource.to_lowercase()))
    });
    entries.truncate(n);
    entries.into_iter().map(|(resource, _)| resource).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_from(entries: &[(&str, usize)]) -> FrequencyTable {
        let table = FrequencyTable::new();
        for (resource, count) in entries {
            for _ in 0..*count {
                table.increment(resource);
            }
        }
        table
    }

    #[test]
    fn orders_by_count_descending() {
        let table = table_from(&[
            ("https://a.cdn/x.js", 3),
            ("https://b.cdn/y.js", 1),
            ("https://c.cdn/z.js", 2),
        ]);
        assert_eq!(
            top_n(&table, 5),
            vec![
                "https://a.cdn/x.js",
                "https://c.cdn/z.js",
                "https://b.cdn/y.js",
            ]
        );
    }

    #[test]
    fn ties_break_by_name_case_insensitive() {
        let table = table_from(&[
            ("https://z.cdn/a.js", 2),
            ("https://m.cdn/b.js", 2),
            ("HTTPS://A.CDN/upper.js", 2),
        ]);
        assert_eq!(
            top_n(&table, 5),
            vec![
                "HTTPS://A.CDN/upper.js",
                "https://m.cdn/b.js",
                "https://z.cdn/a.js",
            ]
        );
    }

    #[test]
    fn adjacent_entries_satisfy_comparator() {
        let table = table_from(&[
            ("https://a.cdn/1.js", 4),
            ("https://b.cdn/2.js", 4),
            ("https://c.cdn/3.js", 1),
            ("https://d.cdn/4.js", 2),
        ]);
        let report = top_n(&table, 10);
        for pair in report.windows(2) {
            let a = table.count(&pair[0]).unwrap();
            let b = table.count(&pair[1]).unwrap();
            assert!(
                a > b || (a == b && pair[0].to_lowercase() <= pair[1].to_lowercase()),
                "{:?} must not precede {:?}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn truncates_to_n() {
        let table = table_from(&[
            ("https://a.cdn/1.js", 5),
            ("https://b.cdn/2.js", 4),
            ("https://c.cdn/3.js", 3),
        ]);
        assert_eq!(
            top_n(&table, 2),
            vec!["https://a.cdn/1.js", "https://b.cdn/2.js"]
        );
    }

    #[test]
    fn returns_fewer_when_table_is_small() {
        let table = table_from(&[("https://a.cdn/1.js", 1)]);
        assert_eq!(top_n(&table, 5).len(), 1);
    }

    #[test]
    fn empty_table_yields_empty_report() {
        let table = FrequencyTable::new();
        assert!(top_n(&table, 5).is_empty());
    }
}
