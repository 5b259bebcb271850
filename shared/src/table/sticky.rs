//! Left offsets for columns pinned during horizontal scrolling.

use super::column::Column;

/// Width assumed for columns without a usable width.
pub const DEFAULT_COLUMN_WIDTH: u32 = 120;

/// Which columns stay pinned to the left edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StickyColumns<K> {
    None,
    /// Only the first column is pinned.
    FirstColumn,
    /// Every column whose key is listed is pinned.
    Keys(Vec<K>),
}

impl<K> Default for StickyColumns<K> {
    fn default() -> Self {
        StickyColumns::None
    }
}

impl<K: PartialEq> StickyColumns<K> {
    pub fn is_sticky(&self, index: usize, key: &K) -> bool {
        match self {
            StickyColumns::None => false,
            StickyColumns::FirstColumn => index == 0,
            StickyColumns::Keys(keys) => keys.contains(key),
        }
    }
}

/// Pixel width of a CSS width such as `"80px"`.
///
/// Reads the leading unsigned integer. Missing, unparsable or zero widths
/// fall back to [`DEFAULT_COLUMN_WIDTH`].
pub fn column_width_px(width: Option<&str>) -> u32 {
    width
        .map(str::trim_start)
        .and_then(|spec| {
            let digits = spec
                .find(|c: char| !c.is_ascii_digit())
                .map_or(spec, |end| &spec[..end]);
            digits.parse::<u32>().ok()
        })
        .filter(|px| *px > 0)
        .unwrap_or(DEFAULT_COLUMN_WIDTH)
}

/// Left offset of the column at `index`: the summed widths of the sticky
/// columns before it. Non-sticky columns contribute nothing. Saturates at
/// `u32::MAX`.
pub fn sticky_offset<K: PartialEq>(columns: &[Column<K>], sticky: &StickyColumns<K>, index: usize) -> u32 {
    columns
        .iter()
        .enumerate()
        .take(index)
        .filter(|(i, column)| sticky.is_sticky(*i, &column.key))
        .map(|(_, column)| column.width_px())
        .fold(0u32, u32::saturating_add)
}

/// Offsets for every column in one pass; `None` for columns that scroll.
pub fn sticky_layout<K: PartialEq>(columns: &[Column<K>], sticky: &StickyColumns<K>) -> Vec<Option<u32>> {
    let mut left = 0u32;
    columns
        .iter()
        .enumerate()
        .map(|(i, column)| {
            if sticky.is_sticky(i, &column.key) {
                let offset = left;
                left = left.saturating_add(column.width_px());
                Some(offset)
            } else {
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns() -> Vec<Column<&'static str>> {
        vec![
            Column::new("id", "ID").width("80px"),
            Column::new("name", "Name").width("120px"),
            Column::new("email", "Email").width("220px"),
            Column::new("department", "Department"),
        ]
    }

    #[test]
    fn test_width_parsing() {
        assert_eq!(column_width_px(Some("80px")), 80);
        assert_eq!(column_width_px(Some("220")), 220);
        assert_eq!(column_width_px(Some(" 96px")), 96);
        assert_eq!(column_width_px(Some("12.5rem")), 12);
        assert_eq!(column_width_px(Some("auto")), DEFAULT_COLUMN_WIDTH);
        assert_eq!(column_width_px(Some("0px")), DEFAULT_COLUMN_WIDTH);
        assert_eq!(column_width_px(Some("")), DEFAULT_COLUMN_WIDTH);
        assert_eq!(column_width_px(None), DEFAULT_COLUMN_WIDTH);
    }

    #[test]
    fn test_offsets_for_sticky_keys() {
        let columns = columns();
        let sticky = StickyColumns::Keys(vec!["id", "name"]);

        assert_eq!(sticky_offset(&columns, &sticky, 0), 0);
        assert_eq!(sticky_offset(&columns, &sticky, 1), 80);
        assert_eq!(sticky_offset(&columns, &sticky, 2), 200);
    }

    #[test]
    fn test_non_sticky_columns_contribute_nothing() {
        let columns = columns();
        let sticky = StickyColumns::Keys(vec!["id", "department"]);

        assert_eq!(sticky_offset(&columns, &sticky, 3), 80);
        assert_eq!(
            sticky_layout(&columns, &sticky),
            vec![Some(0), None, None, Some(80)]
        );
    }

    #[test]
    fn test_default_width_for_sticky_column_without_width() {
        let columns = vec![
            Column::new("a", "A"),
            Column::new("b", "B").width("50px"),
            Column::new("c", "C"),
        ];
        let sticky = StickyColumns::Keys(vec!["a", "b"]);
        assert_eq!(sticky_offset(&columns, &sticky, 2), 170);
    }

    #[test]
    fn test_first_column_variant() {
        let columns = columns();
        let sticky = StickyColumns::FirstColumn;

        assert!(sticky.is_sticky(0, &"id"));
        assert!(!sticky.is_sticky(1, &"name"));
        assert_eq!(
            sticky_layout(&columns, &sticky),
            vec![Some(0), None, None, None]
        );
        assert_eq!(sticky_offset(&columns, &sticky, 3), 80);
    }

    #[test]
    fn test_no_sticky_columns() {
        let columns = columns();
        let sticky = StickyColumns::default();

        assert!(sticky_layout(&columns, &sticky).iter().all(Option::is_none));
        assert_eq!(sticky_offset(&columns, &sticky, 3), 0);
    }

    #[test]
    fn test_layout_matches_offsets() {
        let columns = columns();
        let sticky = StickyColumns::Keys(vec!["name", "email"]);
        let layout = sticky_layout(&columns, &sticky);
        for (i, column) in columns.iter().enumerate() {
            if sticky.is_sticky(i, &column.key) {
                assert_eq!(layout[i], Some(sticky_offset(&columns, &sticky, i)));
            }
        }
    }

    #[test]
    fn test_huge_widths_saturate() {
        let columns = vec![
            Column::new("a", "A").width("4000000000px"),
            Column::new("b", "B").width("4000000000px"),
            Column::new("c", "C").width("80px"),
        ];
        let sticky = StickyColumns::Keys(vec!["a", "b", "c"]);

        assert_eq!(sticky_offset(&columns, &sticky, 1), 4_000_000_000);
        assert_eq!(sticky_offset(&columns, &sticky, 2), u32::MAX);
        assert_eq!(
            sticky_layout(&columns, &sticky),
            vec![Some(0), Some(4_000_000_000), Some(u32::MAX)]
        );
    }
}
