use common::Segment;
use scene::Scene;

#[derive(Clone, PartialEq, Debug)]
pub struct Classification {
    pub top_edges: [Segment; 4],
    pub visible_bottom_edges: Vec<Segment>,
    pub hidden_bottom_edges: Vec<Segment>,
    pub visible_segments: Vec<Segment>,
    pub hidden_segments: Vec<Segment>,
}

pub fn boxes_overlap(a: &Segment, b: &Segment) -> bool {
    a.bounding_box().overlaps(&b.bounding_box())
}

fn occluded_by(segment: &Segment, occluder: &[Segment]) -> bool {
    occluder.iter().any(|edge| boxes_overlap(segment, edge))
}

fn partition(items: &[Segment], occluder: &[Segment], kind: &str) -> (Vec<Segment>, Vec<Segment>) {
    let mut visible = Vec::new();
    let mut hidden = Vec::new();
    for item in items {
        if occluded_by(item, occluder) {
            debug!("{} {:?} is hidden", kind, item);
            hidden.push(*item);
        } else {
            debug!("{} {:?} is visible", kind, item);
            visible.push(*item);
        }
    }
    (visible, hidden)
}

pub fn classify(scene: &Scene) -> Classification {
    let top_edges = scene.top().edges();
    let bottom_edges = scene.bottom().edges();

    let (visible_segments, hidden_segments) =
        partition(scene.segments(), &top_edges, "segment");
    let (visible_bottom_edges, hidden_bottom_edges) =
        partition(&bottom_edges, &top_edges, "bottom edge");

    Classification {
        top_edges,
        visible_bottom_edges,
        hidden_bottom_edges,
        visible_segments,
        hidden_segments,
    }
}
