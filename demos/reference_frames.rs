use layergrid::{shapes::tilted_layers, ReferenceFrame};

/// Convert grid coordinates into a frame with the y axis inverted and z pointing down
fn main() {
    env_logger::init();

    let grid = tilted_layers(3, 2, [200.0, 100.0], 2, -500.0, 25.0, 0.05);
    let target = ReferenceFrame::from_axes([[1.0, 0.0, 0.0], [0.0, -1.0, 0.0], [0.0, 0.0, -1.0]]);

    println!("Source frame:\n{}", grid.reference());
    println!("Target frame:\n{target}");

    let local = grid.all_local_coordinates();
    let converted = grid.reference().convert_points(&local, &target).unwrap();
    for (p, q) in local.chunks(3).zip(converted.chunks(3)) {
        println!("{p:?} -> {q:?}");
    }
}
