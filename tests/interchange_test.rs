//! Layout interchange format round-trips.

use pagesift::{
    BBox, Destination, DocumentLayout, OutlineNode, PageLayout, Primitive, RawAction,
};

#[test]
fn test_document_layout_round_trip() {
    let mut page = PageLayout::new(7, 1, 612.0, 792.0);
    page.push(Primitive::container(
        BBox::new(72.0, 700.0, 120.0, 716.0),
        vec![
            Primitive::character(BBox::new(72.0, 700.0, 82.0, 716.0), "H", "Times-Bold", 16.0),
            Primitive::character(BBox::new(82.0, 700.0, 92.0, 716.0), "i", "Times-Bold", 16.0),
        ],
    ));
    page.push(Primitive::rect(BBox::new(100.0, 100.0, 400.0, 300.0)));
    page.push(Primitive::rule_line(BBox::new(100.0, 98.0, 400.0, 99.0)));

    let layout = DocumentLayout {
        pages: vec![page],
        outline: vec![OutlineNode {
            level: 1,
            title: "Hi".to_string(),
            destination: Some(Destination::PageId(7)),
            action: None,
        }],
        destinations: [("hi".to_string(), 7u64)].into_iter().collect(),
    };

    let json = serde_json::to_string_pretty(&layout).unwrap();
    let back: DocumentLayout = serde_json::from_str(&json).unwrap();

    assert_eq!(back.pages.len(), 1);
    assert_eq!(back.pages[0].id, 7);
    assert_eq!(back.pages[0].primitives.len(), 3);
    assert_eq!(
        back.pages[0].primitives[0].text().as_deref(),
        Some("Hi")
    );
    assert_eq!(back.outline.len(), 1);
    assert_eq!(back.destinations["hi"], 7);
}

#[test]
fn test_primitive_tags() {
    let json = serde_json::to_string(&Primitive::rect(BBox::new(0.0, 0.0, 1.0, 2.0))).unwrap();
    assert_eq!(json, r#"{"type":"rect","bbox":[0.0,0.0,1.0,2.0]}"#);

    let json =
        serde_json::to_string(&Primitive::rule_line(BBox::new(0.0, 0.0, 1.0, 2.0))).unwrap();
    assert!(json.contains(r#""type":"rule_line""#));
}

#[test]
fn test_minimal_layout_defaults() {
    // Outline and destinations may be omitted entirely
    let json = r#"{"pages":[{"id":1,"number":1,"width":612.0,"height":792.0,"primitives":[]}]}"#;
    let layout: DocumentLayout = serde_json::from_str(json).unwrap();
    assert_eq!(layout.pages.len(), 1);
    assert!(layout.outline.is_empty());
    assert!(layout.destinations.is_empty());
}

#[test]
fn test_outline_node_defaults() {
    let json = r#"{"level":1,"title":"Bare"}"#;
    let node: OutlineNode = serde_json::from_str(json).unwrap();
    assert!(node.destination.is_none());
    assert!(node.action.is_none());

    let json = r#"{"level":1,"title":"Linked","action":{"kind":"URI","uri":"http://x"}}"#;
    let node: OutlineNode = serde_json::from_str(json).unwrap();
    assert_eq!(
        node.action,
        Some(RawAction {
            kind: Some("URI".to_string()),
            uri: Some("http://x".to_string()),
        })
    );
}
