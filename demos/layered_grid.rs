use layergrid::{shapes::flat_layers, traits::StructuredIndexing};

/// Detect pinched cells where an eroded layer vanishes
fn main() {
    env_logger::init();

    let mut grid = flat_layers(5, 4, [400.0, 300.0], &[-300.0, -250.0, -200.0]);

    // The middle horizon rises onto the top horizon along the last column
    let mut middle = vec![-250.0; grid.nodes_per_layer()];
    for row in 0..grid.indexing().row_count() {
        middle[row * 5 + 4] = -200.0;
    }
    grid.set_elevations(1, middle).unwrap();

    println!(
        "The grid has {} surfaces, {} nodes and {} cells",
        grid.surface_count(),
        grid.indexing().node_count(),
        grid.indexing().cell_count()
    );

    let report = grid.pinched_elements();
    println!("Pinched cells: {:?}", report.pinched_elements());
    for (below, above) in &report.node_connections {
        println!("  node {below} collapses onto node {above}");
    }

    for (k, depths) in grid.depths_from_top().iter().enumerate() {
        println!("Depths of horizon {k} below the top: {depths:?}");
    }
}
