use crate::error::Result;
use crate::grid::Grid;
use crate::rank::{sort_ranked, MAX_RESULTS};
use ahash::{AHashMap as HashMap, AHashSet as HashSet};

/// Frequency index over every horizontal and vertical substring of a grid.
///
/// Built once from a [`Grid`]; immutable afterwards. Every row (left to right)
/// and every column (top to bottom) contributes each of its contiguous
/// substrings, and the index records how many times each distinct substring
/// occurred across all of those lines.
///
/// Since the index is never mutated after construction it can be shared
/// between threads freely.
pub struct SubstringIndex {
    /// Distinct substring to occurrence count
    table: HashMap<String, u32>,

    /// Shape and totals recorded during construction
    stats: IndexStats,
}

impl SubstringIndex {
    /// Builds the index from a validated grid.
    pub fn new(grid: &Grid) -> Self {
        let mut table: HashMap<String, u32> = HashMap::default();
        let mut lines = 0;
        let mut total_occurrences = 0;

        // Reused for lookups so existing keys are counted without allocating.
        let mut buf = String::new();

        for line in grid.lines() {
            lines += 1;
            for substring in line.substrings() {
                buf.clear();
                buf.extend(substring);
                if let Some(count) = table.get_mut(buf.as_str()) {
                    *count += 1;
                } else {
                    table.insert(buf.clone(), 1);
                }
                total_occurrences += 1;
            }
        }

        let stats = IndexStats {
            rows: grid.rows(),
            cols: grid.cols(),
            lines,
            total_occurrences,
            distinct_substrings: table.len(),
        };
        log::debug!(
            "indexed {}x{} grid: {} lines, {} occurrences, {} distinct substrings",
            stats.rows,
            stats.cols,
            stats.lines,
            stats.total_occurrences,
            stats.distinct_substrings
        );

        Self { table, stats }
    }

    /// Validates `rows` as a [`Grid`] and builds the index from it.
    ///
    /// # Example
    ///
    /// ```
    /// use word_search_rs::SubstringIndex;
    ///
    /// let index = SubstringIndex::from_rows(["chill", "cloud", "windy", "sharp", "frost"])?;
    /// assert_eq!(index.find(["chill", "wind", "cold", "frost"]), vec!["chill", "frost", "wind"]);
    /// # Ok::<(), word_search_rs::Error>(())
    /// ```
    pub fn from_rows<I, S>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let grid = Grid::new(rows)?;
        Ok(Self::new(&grid))
    }

    /// Ranks the query words found in the index.
    ///
    /// Each distinct word is considered once no matter how often it is
    /// repeated; words absent from the index are dropped. The survivors are
    /// ordered by their grid count descending, then alphabetically, and at
    /// most [`MAX_RESULTS`] are returned.
    pub fn find<I, S>(&self, words: I) -> Vec<&str>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen: HashSet<&str> = HashSet::default();
        let mut hits: Vec<(&str, u32)> = Vec::new();
        let mut queried = 0usize;

        for word in words {
            queried += 1;
            if let Some((key, &count)) = self.table.get_key_value(word.as_ref()) {
                if seen.insert(key.as_str()) {
                    hits.push((key.as_str(), count));
                }
            }
        }

        log::trace!("find: {} query words, {} distinct hits", queried, hits.len());

        sort_ranked(&mut hits);
        hits.into_iter()
            .take(MAX_RESULTS)
            .map(|(word, _)| word)
            .collect()
    }

    /// Returns every indexed substring with its count, in rank order.
    ///
    /// Unlike [`find`](Self::find) the result is not capped.
    pub fn all_entries(&self) -> Vec<(&str, u32)> {
        let mut entries: Vec<(&str, u32)> = self
            .table
            .iter()
            .map(|(key, &count)| (key.as_str(), count))
            .collect();
        sort_ranked(&mut entries);
        entries
    }

    /// Returns how many times `word` occurs in the grid's lines.
    pub fn count(&self, word: &str) -> Option<u32> {
        self.table.get(word).copied()
    }

    /// Returns true if `word` occurs in any line of the grid.
    pub fn contains(&self, word: &str) -> bool {
        self.table.contains_key(word)
    }

    /// Returns the number of distinct substrings.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns true if no substrings were indexed (a grid of empty rows).
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Returns statistics gathered during construction.
    pub fn stats(&self) -> IndexStats {
        self.stats
    }
}

/// Statistics about an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexStats {
    /// Number of grid rows
    pub rows: usize,
    /// Number of grid columns
    pub cols: usize,
    /// Horizontal plus vertical lines scanned
    pub lines: usize,
    /// Substring occurrences counted across all lines
    pub total_occurrences: usize,
    /// Number of distinct substrings
    pub distinct_substrings: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    const WEATHER: [&str; 5] = ["chill", "cloud", "windy", "sharp", "frost"];
    const FRUIT: [&str; 5] = [
        "appleorangebanana",
        "grapepeachpearplu",
        "mangokiwiguavaber",
        "papayacherrylemon",
        "limewatermelonfig",
    ];

    #[test]
    fn test_empty_grid() {
        let rows: Vec<&str> = Vec::new();
        assert!(matches!(
            SubstringIndex::from_rows(rows),
            Err(Error::InvalidGrid(_))
        ));
    }

    #[test]
    fn test_oversize_grid() {
        let row = "A".repeat(65);
        let result = SubstringIndex::from_rows(vec![row; 65]);
        assert!(matches!(
            result,
            Err(Error::OversizeGrid { rows: 65, cols: 65 })
        ));
    }

    #[test]
    fn test_ragged_grid() {
        let result = SubstringIndex::from_rows(["abc", "ab"]);
        assert!(matches!(result, Err(Error::InvalidGrid(_))));
    }

    #[test]
    fn test_vertical_words() {
        let index = SubstringIndex::from_rows(["abcd", "efgh", "ijkl", "mnop"]).unwrap();
        let words = ["aeim", "bfjn", "cgko", "dhlp"];
        assert_eq!(index.find(words), words.to_vec());
        for word in words {
            assert_eq!(index.count(word), Some(1));
        }
    }

    #[test]
    fn test_uniform_grid_counts() {
        let index = SubstringIndex::from_rows(["aaaa", "aaaa", "aaaa", "aaaa"]).unwrap();
        assert_eq!(
            index.all_entries(),
            vec![("a", 32), ("aa", 24), ("aaa", 16), ("aaaa", 8)]
        );
    }

    #[test]
    fn test_no_match() {
        let index = SubstringIndex::from_rows(WEATHER).unwrap();
        assert!(index.find(["sunny", "rain", "snow"]).is_empty());
    }

    #[test]
    fn test_mixed_hit_and_miss() {
        let index = SubstringIndex::from_rows(WEATHER).unwrap();
        assert_eq!(
            index.find(["chill", "wind", "cold", "frost"]),
            vec!["chill", "frost", "wind"]
        );
        assert!(!index.contains("cold"));
    }

    #[test]
    fn test_empty_query() {
        let index = SubstringIndex::from_rows(WEATHER).unwrap();
        let words: Vec<String> = Vec::new();
        assert!(index.find(words).is_empty());
    }

    #[test]
    fn test_duplicates_counted_once() {
        let index = SubstringIndex::from_rows(WEATHER).unwrap();
        let result = index.find(["chill", "chill", "wind", "wind", "frost"]);
        assert_eq!(result, vec!["chill", "frost", "wind"]);
        assert_eq!(index.count("wind"), Some(1));
    }

    #[test]
    fn test_substring_words() {
        let index = SubstringIndex::from_rows(WEATHER).unwrap();
        assert_eq!(
            index.find(["chill", "cloud", "wind", "frost"]),
            vec!["chill", "cloud", "frost", "wind"]
        );
    }

    #[test]
    fn test_single_character_grid() {
        let index = SubstringIndex::from_rows(["A"]).unwrap();
        assert_eq!(index.find(["A", "B"]), vec!["A"]);
        // One horizontal and one vertical line of length 1.
        assert_eq!(index.count("A"), Some(2));
    }

    #[test]
    fn test_single_row_grid() {
        let index = SubstringIndex::from_rows(["ABCDEFGHIJKLMNOPQRSTUVWXYZ"]).unwrap();
        assert_eq!(index.find(["ABC", "XYZ", "PQR"]), vec!["ABC", "PQR", "XYZ"]);
    }

    #[test]
    fn test_single_column_grid() {
        let rows = ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J"];
        let index = SubstringIndex::from_rows(rows).unwrap();
        assert_eq!(index.find(["GHI", "ABC", "DEF"]), vec!["ABC", "DEF", "GHI"]);
    }

    #[test]
    fn test_repeated_query_words() {
        let index = SubstringIndex::from_rows(FRUIT).unwrap();
        let words = [
            "apple", "orange", "apple", "banana", "apple", "grape", "orange", "banana",
            "mango", "apple", "kiwi",
        ];
        assert_eq!(
            index.find(words),
            vec!["apple", "banana", "grape", "kiwi", "mango", "orange"]
        );
    }

    #[test]
    fn test_result_capped_at_ten() {
        let index = SubstringIndex::from_rows(FRUIT).unwrap();
        let words = [
            "apple", "orange", "banana", "grape", "peach", "pear", "plum", "mango", "kiwi",
            "guava", "papaya", "cherry", "lemon", "lime", "watermelon", "fig", "orange",
            "banana", "cherry", "apple", "mango", "peach",
        ];
        assert_eq!(
            index.find(words),
            vec![
                "apple", "banana", "cherry", "fig", "grape", "guava", "kiwi", "lemon", "lime",
                "mango"
            ]
        );
    }

    #[test]
    fn test_frequency_ranks_first() {
        let index = SubstringIndex::from_rows([
            "appleappleapple",
            "appleorangepear",
            "bananaappleplum",
            "appleorangekiwi",
        ])
        .unwrap();
        assert_eq!(index.count("apple"), Some(6));
        assert_eq!(index.count("orange"), Some(2));
        assert_eq!(index.count("banana"), Some(1));
        assert_eq!(
            index.find(["banana", "grape", "orange", "apple"]),
            vec!["apple", "orange", "banana"]
        );
    }

    #[test]
    fn test_stats() {
        let index = SubstringIndex::from_rows(["abc", "def"]).unwrap();
        let stats = index.stats();
        assert_eq!(stats.rows, 2);
        assert_eq!(stats.cols, 3);
        assert_eq!(stats.lines, 5);
        // Two rows of length 3 plus three columns of length 2.
        assert_eq!(stats.total_occurrences, 2 * 6 + 3 * 3);
        assert_eq!(stats.distinct_substrings, index.len());
    }

    #[test]
    fn test_zero_width_grid() {
        let index = SubstringIndex::from_rows(["", ""]).unwrap();
        assert!(index.is_empty());
        assert!(index.all_entries().is_empty());
        assert!(index.find(["a"]).is_empty());
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_index_is_send_sync() {
        assert_send_sync::<SubstringIndex>();
    }

    #[test]
    fn test_shared_across_threads() {
        let index = SubstringIndex::from_rows(WEATHER).unwrap();
        let index = &index;
        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(move || index.find(["frost", "chill", "wind", "cold"])))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), vec!["chill", "frost", "wind"]);
            }
        });
    }

    #[test]
    fn test_case_sensitive() {
        let index = SubstringIndex::from_rows(["Ab", "cd"]).unwrap();
        assert!(index.contains("Ab"));
        assert!(!index.contains("ab"));
    }
}
