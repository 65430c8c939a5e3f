use anyhow::{Context, Result};
use quantbio_core::distance::{distance_matrix, hamming_distance, p_distance, pairwise_distances};

pub fn show_hamming(first: &str, second: &str) -> Result<()> {
    let dist = hamming_distance(first, second)
        .with_context(|| format!("Cannot compare '{first}' and '{second}'"))?;
    let p = p_distance(first, second)?;

    println!("Hamming distance: {dist}");
    println!("p-distance: {p:.4}");

    Ok(())
}

pub fn show_distance_matrix(strings: &[String], normalized: bool) -> Result<()> {
    let rows: Vec<Vec<String>> = if normalized {
        distance_matrix(strings)
            .context("Cannot build distance matrix")?
            .into_iter()
            .map(|row| row.into_iter().map(|d| format!("{d:.4}")).collect())
            .collect()
    } else {
        let condensed = pairwise_distances(strings).context("Cannot build distance matrix")?;
        expand_condensed(&condensed, strings.len())
            .into_iter()
            .map(|row| row.into_iter().map(|d| d.to_string()).collect())
            .collect()
    };

    let mut content = String::new();
    content.push('\t');
    content.push_str(&strings.join("\t"));
    content.push('\n');
    for (label, row) in strings.iter().zip(&rows) {
        content.push_str(label);
        content.push('\t');
        content.push_str(&row.join("\t"));
        content.push('\n');
    }
    print!("{content}");

    Ok(())
}

/// Rebuild a symmetric n×n matrix from its condensed upper triangle.
fn expand_condensed(condensed: &[usize], n: usize) -> Vec<Vec<usize>> {
    let mut matrix = vec![vec![0; n]; n];
    let mut k = 0;
    for i in 0..n {
        for j in (i + 1)..n {
            matrix[i][j] = condensed[k];
            matrix[j][i] = condensed[k];
            k += 1;
        }
    }
    matrix
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_condensed() {
        let m = expand_condensed(&[1, 2, 3], 3);
        assert_eq!(m, vec![vec![0, 1, 2], vec![1, 0, 3], vec![2, 3, 0]]);
        assert!(expand_condensed(&[], 0).is_empty());
    }
}
