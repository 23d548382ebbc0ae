//! Decoration applied once to freshly fetched records.
//!
//! The placeholder endpoint carries no suffix or title, so the demo fills them
//! from the record position. Real sources plug in [`NoExtras`].

use super::Person;

pub trait Enrich {
    fn apply(&self, people: &mut [Person]);
}

/// Index-derived suffix and title: `Jr.` on even positions, `Mr.` on multiples
/// of 3, otherwise `Mrs.` on multiples of 5.
#[derive(Clone, Copy, Debug, Default)]
pub struct DemoExtras;

impl DemoExtras {
    pub fn suffix_for(index: usize) -> Option<&'static str> {
        (index % 2 == 0).then_some("Jr.")
    }

    pub fn title_for(index: usize) -> Option<&'static str> {
        if index % 3 == 0 {
            Some("Mr.")
        } else if index % 5 == 0 {
            Some("Mrs.")
        } else {
            None
        }
    }
}

impl Enrich for DemoExtras {
    fn apply(&self, people: &mut [Person]) {
        for (i, p) in people.iter_mut().enumerate() {
            p.suffix = Self::suffix_for(i).map(str::to_string);
            p.title = Self::title_for(i).map(str::to_string);
        }
    }
}

/// Leaves records as fetched.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoExtras;

impl Enrich for NoExtras {
    fn apply(&self, _people: &mut [Person]) {}
}

/// Pick the decoration step from the `demo_extras` switch.
pub fn from_flag(demo_extras: bool) -> Box<dyn Enrich + Send + Sync> {
    if demo_extras {
        Box::new(DemoExtras)
    } else {
        Box::new(NoExtras)
    }
}
