use chrono::{Duration, SecondsFormat, Utc};
use listing_cards::adapter::{format_location, parse_options};
use listing_cards::{to_card_model, PropertyRecord};
use serde_json::json;

fn record(offers: serde_json::Value) -> PropertyRecord {
    let created_at = (Utc::now() - Duration::days(1)).to_rfc3339_opts(SecondsFormat::Secs, true);
    serde_json::from_value(json!({
        "id": 101,
        "title": "합정역 도보 5분 원룸",
        "address": "서울시 마포구 합정동 412-3",
        "areaM2": 23.4,
        "buildingYear": 2018,
        "listingType": "BROKER",
        "status": "AVAILABLE",
        "anomalyAlert": false,
        "createdAt": created_at,
        "locationX": 126.914,
        "locationY": 37.549,
        "offers": offers
    }))
    .unwrap()
}

#[test]
fn test_empty_offers_degrade_to_placeholders() {
    let card = to_card_model(&record(json!([])));

    assert_eq!(card.price, "내용 없음");
    assert_eq!(card.details.split(" ∙ ").next(), Some("정보 없음"));
}

#[test]
fn test_sale_and_wolse_prices() {
    let sale = to_card_model(&record(json!([{ "type": "SALE", "totalPrice": 150000000 }])));
    assert_eq!(sale.price, "매매 1억 5000");

    let wolse = to_card_model(&record(json!([
        { "type": "WOLSE", "deposit": 10000000, "monthlyRent": 500000, "housetype": "ONE", "floor": 3, "oftion": 20 }
    ])));
    assert_eq!(wolse.price, "월세 1000만/ 50만");
    assert_eq!(wolse.details, "원룸 ∙ 방 1개 ∙ 3층 ∙ 23m²");
    assert_eq!(wolse.options, vec!["세탁기", "주차장"]);
    assert_eq!(wolse.location, "마포구 합정동");
    assert_eq!(wolse.tags, vec!["중개", "추천"]);
    assert!(wolse.is_recommended);
}

#[test]
fn test_zero_priced_sale_is_dropped() {
    let card = to_card_model(&record(json!([{ "type": "SALE", "totalPrice": 0, "isActive": true }])));
    assert_eq!(card.price, "내용 없음");
}

#[test]
fn test_active_flag_picks_among_valid_offers() {
    let card = to_card_model(&record(json!([
        { "type": "JEONSE", "deposit": 200000000 },
        { "type": "SALE", "totalPrice": 0, "isActive": true },
        { "type": "SALE", "totalPrice": 730000000, "isActive": true }
    ])));
    assert_eq!(card.price, "매매 7억 3000");
}

#[test]
fn test_helpers_on_public_surface() {
    assert_eq!(parse_options(Some(20)), vec!["세탁기", "주차장"]);
    assert_eq!(format_location(Some("서울시 강남구 역삼동")), "강남구 역삼동");
    assert_eq!(format_location(Some("강남역")), "강남역");
}

#[test]
fn test_adapting_twice_gives_identical_cards() {
    let input = record(json!([{ "type": "JEONSE", "deposit": 320000000, "housetype": "BILLA" }]));
    assert_eq!(to_card_model(&input), to_card_model(&input));
}
