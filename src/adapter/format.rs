use crate::models::{HouseType, ListingType, OfferRecord, OfferType, PropertyRecord};

const EOK: i64 = 100_000_000;
const MAN: i64 = 10_000;

pub const NO_PRICE: &str = "내용 없음";
pub const NO_DETAILS: &str = "정보 없음";
const DETAIL_SEPARATOR: &str = " ∙ ";

/// Price line for the card, e.g. "매매 1억 5000" or "월세 1000만/ 50만"
pub fn format_price(offer: Option<&OfferRecord>) -> String {
    let Some(offer) = offer else {
        return NO_PRICE.to_string();
    };

    match offer.offer_type {
        Some(OfferType::Sale) => format_currency(offer.total_price.unwrap_or(0), "매매"),
        Some(OfferType::Jeonse) => format_currency(offer.deposit.unwrap_or(0), "전세"),
        Some(OfferType::Wolse) => {
            let deposit = format_currency(offer.deposit.unwrap_or(0), "");
            let rent = format_currency(offer.monthly_rent.unwrap_or(0), "");
            format!("월세 {}/ {}", deposit, rent)
        }
        _ => NO_PRICE.to_string(),
    }
}

/// Korean won in 억/만 units.
///
/// From 1억 up the 만 remainder is appended as a bare number and dropped when
/// zero; between 1만 and 1억 the amount is truncated to whole 만. Smaller
/// amounts are printed with thousands separators. Zero yields "".
pub fn format_currency(amount: i64, label: &str) -> String {
    if amount == 0 {
        return String::new();
    }

    let body = if amount >= EOK {
        let eok = amount / EOK;
        let man = (amount % EOK) / MAN;
        if man == 0 {
            format!("{}억", eok)
        } else {
            format!("{}억 {}", eok, man)
        }
    } else if amount >= MAN {
        format!("{}만", amount / MAN)
    } else {
        group_thousands(amount)
    };

    if label.is_empty() {
        body
    } else {
        format!("{} {}", label, body)
    }
}

fn group_thousands(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if amount < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Detail line: building type, room count, floor and area joined by " ∙ "
pub fn format_details(property: &PropertyRecord, offer: Option<&OfferRecord>) -> String {
    let mut parts: Vec<String> = Vec::new();

    // An empty code counts as missing
    match offer
        .and_then(|o| o.housetype.as_ref())
        .map(HouseType::label)
        .filter(|label| !label.is_empty())
    {
        Some(label) => parts.push(label.to_string()),
        None => parts.push(NO_DETAILS.to_string()),
    }

    // The API has no room-count field; it is read out of `floor`
    // until the schema says otherwise.
    if let Some(floor) = offer.and_then(|o| o.floor).filter(|f| *f != 0) {
        parts.push(format!("방 {}개", room_count_from_floor(floor)));
        parts.push(format!("{}층", floor));
    }

    if let Some(area) = property.area_m2.filter(|a| *a != 0.0 && !a.is_nan()) {
        parts.push(format!("{}m²", area.round() as i64));
    }

    parts.join(DETAIL_SEPARATOR)
}

fn room_count_from_floor(floor: i32) -> i32 {
    match floor.div_euclid(10) {
        0 => 1,
        rooms => rooms,
    }
}

/// Badges shown on the card, in display order
pub fn generate_tags(property: &PropertyRecord) -> Vec<String> {
    let mut tags = Vec::with_capacity(3);

    match property.listing_type {
        Some(ListingType::Owner) => tags.push("직거래".to_string()),
        Some(ListingType::Broker) => tags.push("중개".to_string()),
        _ => {}
    }

    if property.anomaly_alert {
        tags.push("확인".to_string());
    }

    if property.is_available() {
        tags.push("추천".to_string());
    }

    tags
}

/// Drops the leading region token: "서울시 강남구 역삼동" -> "강남구 역삼동"
pub fn format_location(address: Option<&str>) -> String {
    let Some(address) = address.filter(|a| !a.is_empty()) else {
        return String::new();
    };

    let parts: Vec<&str> = address.split(' ').collect();
    if parts.len() >= 3 {
        parts[1..3].join(" ")
    } else {
        address.to_string()
    }
}
