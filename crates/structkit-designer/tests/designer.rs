#[path = "designer/gestures.rs"]
mod gestures;
#[path = "designer/io.rs"]
mod io;
#[path = "designer/placement.rs"]
mod placement;
#[path = "designer/projections.rs"]
mod projections;
