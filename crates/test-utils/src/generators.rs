//! Table generators for creating synthetic heat map inputs.
//!
//! These generators create predictable, verifiable CSV text that can be
//! used across the test suite.

/// Creates a CSV table whose value rises left to right.
///
/// Cell `(col, row)` holds `col / (width - 1)`, so the first column is 0.0
/// and the last column is 1.0 in every row.
///
/// # Example
///
/// ```
/// use test_utils::gradient_table_csv;
///
/// let csv = gradient_table_csv(3, 2);
/// assert_eq!(csv, "0,0.5,1\n0,0.5,1\n");
/// ```
pub fn gradient_table_csv(width: usize, height: usize) -> String {
    let denominator = width.saturating_sub(1).max(1) as f64;
    let row = (0..width)
        .map(|col| (col as f64 / denominator).to_string())
        .collect::<Vec<_>>()
        .join(",");

    let mut csv = String::with_capacity((row.len() + 1) * height);
    for _ in 0..height {
        csv.push_str(&row);
        csv.push('\n');
    }
    csv
}

/// Creates a CSV table with labels: `,c1,c2,...` then `rN,...` rows.
///
/// Data values follow [`gradient_table_csv`].
pub fn labelled_table_csv(width: usize, height: usize) -> String {
    let header = (1..=width)
        .map(|col| format!("c{}", col))
        .collect::<Vec<_>>()
        .join(",");

    let mut csv = format!(",{}\n", header);
    for (row, line) in gradient_table_csv(width, height).lines().enumerate() {
        csv.push_str(&format!("r{},{}\n", row + 1, line));
    }
    csv
}

/// Creates a CSV table of a constant value.
pub fn constant_table_csv(width: usize, height: usize, value: f64) -> String {
    let row = vec![value.to_string(); width].join(",");
    let mut csv = String::new();
    for _ in 0..height {
        csv.push_str(&row);
        csv.push('\n');
    }
    csv
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_table_shape() {
        let csv = gradient_table_csv(5, 3);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|line| line.split(',').count() == 5));
        assert_eq!(lines[0], "0,0.25,0.5,0.75,1");
    }

    #[test]
    fn test_labelled_table() {
        let csv = labelled_table_csv(2, 2);
        assert_eq!(csv, ",c1,c2\nr1,0,1\nr2,0,1\n");
    }

    #[test]
    fn test_constant_table() {
        assert_eq!(constant_table_csv(2, 1, 0.5), "0.5,0.5\n");
    }
}
