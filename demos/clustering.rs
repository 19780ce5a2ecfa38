//! DBSCAN on a simple 2D dataset, with the default and a custom metric.

use denscan::{Dbscan, DbscanFit, NOISE};

fn print_fit(data: &[Vec<f32>], fit: &DbscanFit) {
    for (i, label) in fit.labels.iter().enumerate() {
        let tag = if *label == NOISE {
            "NOISE".to_string()
        } else {
            format!("cluster {}", label)
        };
        println!("  point {:2} ({:5.1}, {:5.1}) => {}", i, data[i][0], data[i][1], tag);
    }
    println!("  {} cluster(s), {} noise point(s)", fit.n_clusters(), fit.noise_points().len());
}

fn main() {
    // Three well-separated clusters in 2D, plus one outlier.
    let data: Vec<Vec<f32>> = vec![
        // Cluster A (near origin)
        vec![0.0, 0.0],
        vec![0.1, 0.2],
        vec![0.2, 0.1],
        vec![-0.1, 0.1],
        // Cluster B (near (5, 5))
        vec![5.0, 5.0],
        vec![5.1, 4.9],
        vec![4.9, 5.1],
        vec![5.2, 5.2],
        // Cluster C (near (10, 0))
        vec![10.0, 0.0],
        vec![10.1, 0.1],
        vec![9.9, -0.1],
        vec![10.2, 0.2],
        // Outlier
        vec![20.0, 20.0],
    ];

    // --- DBSCAN with the default Euclidean metric ---
    let dbscan = Dbscan::new(1.0, 3);
    let fit = dbscan.fit(&data).unwrap();
    println!("=== DBSCAN, Euclidean (eps=1.0, min_pts=3) ===");
    print_fit(&data, &fit);

    // --- Same data under Manhattan (L1) distance ---
    let manhattan =
        |a: &[f32], b: &[f32]| a.iter().zip(b.iter()).map(|(x, y)| (x - y).abs()).sum::<f32>();
    let fit = Dbscan::new(1.0, 3).with_metric(manhattan).fit(&data).unwrap();
    println!("\n=== DBSCAN, Manhattan (eps=1.0, min_pts=3) ===");
    print_fit(&data, &fit);
}
