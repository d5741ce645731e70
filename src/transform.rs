//! Walks a tours document and turns it into ordered INSERT statements.
//!
//! Surrogate ids are handed out per entity kind in document order. The
//! tour, landmark and photo counters run across the whole document and
//! are never reset when moving to the next parent, so join rows always
//! match the insert order of the rows they reference.

use tracing::debug;

use crate::parser::{Category, Document, Landmark, Tour};
use crate::schema::tables::{
    CATEGORIES, LANDMARKS, LANDMARK_PHOTOS, PHOTOS, TOURS, TOUR_CATEGORIES, TOUR_LANDMARKS,
    WAYPOINTS,
};
use crate::schema::TableSchema;
use crate::writer::{render_insert, SqlValue};

/// Last id handed out for each entity kind (0 = none yet)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct IdCounters {
    category: u64,
    tour: u64,
    landmark: u64,
    photo: u64,
}

impl IdCounters {
    fn next_category(&mut self) -> u64 {
        self.category += 1;
        self.category
    }

    fn next_tour(&mut self) -> u64 {
        self.tour += 1;
        self.tour
    }

    fn next_landmark(&mut self) -> u64 {
        self.landmark += 1;
        self.landmark
    }

    fn next_photo(&mut self) -> u64 {
        self.photo += 1;
        self.photo
    }
}

/// Entity and statement counts for one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub categories: u64,
    pub tours: u64,
    pub waypoints: u64,
    pub landmarks: u64,
    pub photos: u64,
    pub statements: u64,
}

/// Accumulates statements while walking one document
#[derive(Debug, Default)]
pub struct Transformer {
    ids: IdCounters,
    waypoints: u64,
    statements: Vec<String>,
}

impl Transformer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn summary(&self) -> SeedSummary {
        SeedSummary {
            categories: self.ids.category,
            tours: self.ids.tour,
            waypoints: self.waypoints,
            landmarks: self.ids.landmark,
            photos: self.ids.photo,
            statements: self.statements.len() as u64,
        }
    }

    pub fn into_statements(self) -> Vec<String> {
        self.statements
    }

    pub fn add_document(&mut self, document: &Document) {
        for category in &document.categories {
            self.add_category(category);
        }
    }

    fn add_category(&mut self, category: &Category) {
        let category_id = self.ids.next_category();
        debug!(category_id, name = %category.name, tours = category.tours.len(), "category");

        self.emit(
            &CATEGORIES,
            &[
                category.name.as_str().into(),
                category.description.as_str().into(),
            ],
        );

        for tour in &category.tours {
            self.add_tour(tour, category_id);
        }
    }

    fn add_tour(&mut self, tour: &Tour, category_id: u64) {
        let tour_id = self.ids.next_tour();

        self.emit(
            &TOURS,
            &[tour.name.as_str().into(), tour.description.as_str().into()],
        );
        self.emit(&TOUR_CATEGORIES, &[tour_id.into(), category_id.into()]);

        for (ordering, waypoint) in tour.waypoints.iter().enumerate() {
            self.waypoints += 1;
            self.emit(
                &WAYPOINTS,
                &[
                    waypoint.lat().into(),
                    waypoint.long().into(),
                    tour_id.into(),
                    (ordering as u64).into(),
                ],
            );
        }

        for (ordering, landmark) in tour.landmarks.iter().enumerate() {
            self.add_landmark(landmark, tour_id, ordering as u64);
        }
    }

    fn add_landmark(&mut self, landmark: &Landmark, tour_id: u64, ordering: u64) {
        let landmark_id = self.ids.next_landmark();

        self.emit(
            &LANDMARKS,
            &[
                landmark.name.as_str().into(),
                landmark.description.as_str().into(),
                landmark.coordinate.lat().into(),
                landmark.coordinate.long().into(),
            ],
        );
        self.emit(
            &TOUR_LANDMARKS,
            &[tour_id.into(), landmark_id.into(), ordering.into()],
        );

        for url in &landmark.photos {
            let photo_id = self.ids.next_photo();
            self.emit(&PHOTOS, &[url.as_str().into()]);
            self.emit(&LANDMARK_PHOTOS, &[landmark_id.into(), photo_id.into()]);
        }
    }

    fn emit(&mut self, schema: &TableSchema, values: &[SqlValue]) {
        self.statements.push(render_insert(schema, values));
    }
}

/// Transform a whole document into statements in emission order
pub fn transform(document: &Document) -> (Vec<String>, SeedSummary) {
    let mut transformer = Transformer::new();
    transformer.add_document(document);

    let summary = transformer.summary();
    (transformer.into_statements(), summary)
}
