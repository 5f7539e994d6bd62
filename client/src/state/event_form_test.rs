use super::*;

fn filled() -> EventForm {
    EventForm {
        name: " Cairo Jazz Night ".to_owned(),
        description: "Live quartet".to_owned(),
        venue: "Cairo Opera House".to_owned(),
        date: "2025-06-01".to_owned(),
        time: "20:00".to_owned(),
        price: "350".to_owned(),
        total_seats: "200".to_owned(),
        category: "music".to_owned(),
        status: "upcoming".to_owned(),
    }
}

#[test]
fn default_form_starts_upcoming() {
    let form = EventForm::default();
    assert_eq!(form.status, "upcoming");
    assert!(form.name.is_empty());
}

#[test]
fn validate_produces_typed_draft() {
    let draft = filled().validate().unwrap();
    assert_eq!(draft.name, "Cairo Jazz Night");
    assert!((draft.price - 350.0).abs() < f64::EPSILON);
    assert_eq!(draft.total_seats, 200);
}

#[test]
fn validate_reports_first_missing_required_field() {
    let mut form = filled();
    form.venue = "  ".to_owned();
    form.date = String::new();
    assert_eq!(form.validate(), Err(FormError::Missing("Venue")));
}

#[test]
fn validate_rejects_negative_or_garbage_price() {
    let mut form = filled();
    form.price = "-5".to_owned();
    assert_eq!(form.validate(), Err(FormError::InvalidNumber("Price (EGP)")));
    form.price = "abc".to_owned();
    assert_eq!(form.validate(), Err(FormError::InvalidNumber("Price (EGP)")));
}

#[test]
fn validate_rejects_fractional_seats() {
    let mut form = filled();
    form.total_seats = "12.5".to_owned();
    assert_eq!(form.validate(), Err(FormError::InvalidNumber("Total Seats")));
}

#[test]
fn blank_status_falls_back_to_upcoming() {
    let mut form = filled();
    form.status = String::new();
    assert_eq!(form.validate().unwrap().status, "upcoming");
}

#[test]
fn set_and_get_address_the_same_slot() {
    let mut form = EventForm::default();
    for field in Field::ALL {
        form.set(field, field.label().to_owned());
    }
    for field in Field::ALL {
        assert_eq!(form.get(field), field.label());
    }
}

#[test]
fn from_event_reduces_timestamp_to_date() {
    let event: Event = serde_json::from_value(serde_json::json!({
        "_id": "e1",
        "name": "Expo",
        "date": "2025-09-14T10:00:00.000Z",
        "price": 120.5,
        "totalSeats": 80,
        "status": ""
    }))
    .unwrap();
    let form = EventForm::from_event(&event);
    assert_eq!(form.date, "2025-09-14");
    assert_eq!(form.price, "120.5");
    assert_eq!(form.total_seats, "80");
    assert_eq!(form.status, "upcoming");
}

#[test]
fn draft_serializes_camel_case() {
    let json = serde_json::to_value(filled().validate().unwrap()).unwrap();
    assert_eq!(json["totalSeats"], 200);
    assert_eq!(json["price"], 350.0);
}

#[test]
fn input_types_match_fields() {
    assert_eq!(Field::Date.input_type(), "date");
    assert_eq!(Field::Price.input_type(), "number");
    assert_eq!(Field::Name.input_type(), "text");
}
