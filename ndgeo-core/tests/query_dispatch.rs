//! Conversations with the query dispatcher, as a console user would have them.

use ndgeo_core::{GeometryAgent, NdShape, Shape};

fn agent() -> GeometryAgent {
    GeometryAgent::with_seed(2024).unwrap()
}

#[test]
fn test_session_saves_every_created_shape() {
    let mut agent = agent();
    let queries = [
        "create a 4D sphere with radius 2",
        "make a 5-dimensional cube with side 1.5",
        "create a 3D ellipsoid with axes 1.5 2.0 3.0",
        "create a 3D tetrahedron with side 2",
        "make a 4D hyperpyramid base 2.5 height 4",
    ];
    for (i, query) in queries.iter().enumerate() {
        let reply = agent.process_query(query);
        assert!(
            reply.contains(&format!("'shape{}'", i + 1)),
            "query {:?} gave {:?}",
            query,
            reply
        );
    }

    let saved = agent.saved_shapes();
    assert_eq!(saved.len(), 5);
    assert!(matches!(saved.get("shape1"), Some(Shape::Sphere(_))));
    assert!(matches!(saved.get("shape2"), Some(Shape::Cube(_))));
    assert!(matches!(saved.get("shape3"), Some(Shape::Ellipsoid(_))));
    assert!(matches!(saved.get("shape4"), Some(Shape::Simplex(_))));
    assert!(matches!(saved.get("shape5"), Some(Shape::Pyramid(_))));
    assert_eq!(saved["shape5"].dimensions(), 4);
}

#[test]
fn test_property_queries_do_not_save() {
    let mut agent = agent();
    agent.process_query("volume of 4D hypercube side 2.5");
    agent.process_query("pyramid base 2 height 3");
    agent.process_query("ellipsoid with axes 1 2 3");
    assert!(agent.saved_shapes().is_empty());
}

#[test]
fn test_volume_answer_matches_shape() {
    let mut agent = agent();
    let reply = agent.process_query("Volume of 4D hypercube side 2.5");
    assert!(reply.starts_with("Volume of 4D cube: 39.062500"), "{}", reply);
}

#[test]
fn test_help_examples_all_get_answers() {
    let mut agent = agent();
    let examples = [
        "hexagonal tiling side 1.0 area 10x10",
        "square tiling with cubes area 5x5",
        "triangular tiling with simplices bounds 0 8",
        "voronoi tiling seeds 15 area 12x8",
        "regular tiling with circles density 1.5",
        "compare 6D sphere and cube parameter 2",
        "classic sphere diameter 4",
    ];
    for query in examples {
        let reply = agent.process_query(query);
        assert!(!reply.starts_with("Sorry"), "{} -> {}", query, reply);
        assert!(!reply.starts_with("Error"), "{} -> {}", query, reply);
        assert!(!reply.contains("Geometry Engine Commands"), "{} fell through to help", query);
    }
}

#[test]
fn test_triangular_tiling_uses_simplices() {
    let mut agent = agent();
    let reply = agent.process_query("triangular tiling with simplices bounds 0 8");
    assert!(reply.contains("• Base shape: Triangle"), "{}", reply);
    assert!(reply.contains("• Vertex configuration: 3.3.3.3.3.3"));
}

#[test]
fn test_density_is_not_read_as_dimensions() {
    let mut agent = agent();
    let reply = agent.process_query("regular tiling with circles density 1.5");
    assert!(reply.contains("• Dimensions: 2D"), "{}", reply);
}

#[test]
fn test_try_process_query_surfaces_errors() {
    let mut agent = agent();
    assert!(agent.try_process_query("create a sphere with radius 0").is_err());
    assert!(agent
        .process_query("create a sphere with radius 0")
        .starts_with("Sorry, I encountered an error:"));
    assert!(agent.try_process_query("what is this").is_ok());
}
