/// Cosine similarity between two vectors of equal length.
///
/// Returns 0 when either vector has zero magnitude.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let magnitude_a = magnitude(a);
    let magnitude_b = magnitude(b);

    if magnitude_a == 0.0 || magnitude_b == 0.0 {
        return 0.0;
    }

    dot / (magnitude_a * magnitude_b)
}

/// Scores `query` against every vector in `vectors`, preserving order
pub fn similarity(query: &[f32], vectors: &[Vec<f32>]) -> Vec<f32> {
    vectors.iter().map(|v| cosine_similarity(query, v)).collect()
}

/// All-pairs cosine similarity matrix.
///
/// Only the upper triangle is computed; the lower is mirrored from it and the
/// diagonal is exactly 1 for non-zero vectors.
pub fn pairwise(vectors: &[Vec<f32>]) -> Vec<Vec<f32>> {
    let n = vectors.len();
    let mut matrix = vec![vec![0.0f32; n]; n];

    for i in 0..n {
        matrix[i][i] = if magnitude(&vectors[i]) > 0.0 { 1.0 } else { 0.0 };
        for j in (i + 1)..n {
            let score = cosine_similarity(&vectors[i], &vectors[j]);
            matrix[i][j] = score;
            matrix[j][i] = score;
        }
    }

    matrix
}

fn magnitude(v: &[f32]) -> f32 {
    v.iter().map(|x| x * x).sum::<f32>().sqrt()
}
