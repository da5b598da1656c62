//! Per-operation schemas.

use super::schema::{Field, ObjectSchema, Rule, StringFormat};

/// Body of `POST /parks`.
pub fn park_schema() -> ObjectSchema {
    ObjectSchema::new(vec![
        Field::string("description").required(),
        Field::string("designation").required(),
        Field::string("directionsInfo").required(),
        Field::string("directionsUrl")
            .format(StringFormat::Uri)
            .required(),
        Field::string("email").format(StringFormat::Email).required(),
        Field::text("ext"),
        Field::string("fullName").required(),
        Field::string("id").format(StringFormat::Uuid4).required(),
        Field::number("latitude").required(),
        Field::number("longitude").required(),
        Field::string("name").required(),
        Field::string("parkCode")
            .format(StringFormat::ParkCode)
            .required(),
        Field::string("phoneNumber")
            .format(StringFormat::Phone)
            .required(),
        Field::string("url").format(StringFormat::Uri).required(),
        Field::string("weatherInfo").required(),
    ])
}

/// Body of `POST /articles`.
pub fn article_schema() -> ObjectSchema {
    ObjectSchema::new(vec![
        Field::string("parkCode")
            .format(StringFormat::ParkCode)
            .required(),
        Field::string("id").format(StringFormat::Uuid4).required(),
        Field::string("url").format(StringFormat::Uri).required(),
        Field::string("title").required(),
        Field::string("listingDescription").required(),
        Field::text("listingImageUrl"),
        Field::string("altText").required_with("listingImageUrl"),
        Field::number("latitude").allow_empty(),
        Field::number("longitude").allow_empty(),
        Field::array("tags", Rule::string()),
        Field::text("credit"),
    ])
}

/// Body of `POST /favorites`.
pub fn add_favorite_schema() -> ObjectSchema {
    ObjectSchema::new(vec![
        Field::string("userId").required(),
        Field::string("campgroundId")
            .format(StringFormat::Uuid4)
            .required(),
        Field::string("parkId").required(),
        Field::string("campgroundName").required(),
        Field::text("campgroundImageAltText"),
        Field::text("campgroundImageUrl"),
        Field::text("campgroundUrl"),
        Field::string("parkName").required(),
    ])
}

/// Body of `DELETE /favorites`.
pub fn remove_favorite_schema() -> ObjectSchema {
    ObjectSchema::new(vec![
        Field::string("campgroundId")
            .format(StringFormat::Uuid4)
            .required(),
        Field::string("userId").required(),
    ])
}

/// Query of `GET /campsites`: a length check only, digits pass.
pub fn campsite_query_schema() -> ObjectSchema {
    ObjectSchema::new(vec![Field::string("parkCode")
        .format(StringFormat::Length(4))
        .required()])
}

/// Query of `GET /favorites`.
pub fn favorites_query_schema() -> ObjectSchema {
    ObjectSchema::new(vec![Field::string("userId").required()])
}

fn uri_text(name: &'static str) -> Field {
    Field::text(name).format(StringFormat::Uri)
}

fn numeric_text(name: &'static str) -> Field {
    Field::text(name).format(StringFormat::Numeric)
}

fn texts(names: &[&'static str]) -> Vec<Field> {
    names.iter().copied().map(Field::text).collect()
}

fn string_list(name: &'static str) -> Field {
    Field::array(name, Rule::string())
}

const WEEKDAYS: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// Body of `POST /campsites`.
pub fn campsite_schema() -> ObjectSchema {
    let amenities = {
        let mut fields = texts(&[
            "trashRecyclingCollection",
            "internetConnectivity",
            "cellPhoneReception",
            "laundry",
            "amphitheater",
            "dumpStation",
            "campStore",
            "staffOrVolunteerHostOnsite",
            "iceAvailableForSale",
            "firewoodForSale",
            "foodStorageLockers",
        ]);
        fields.extend([
            string_list("toilets"),
            string_list("showers"),
            string_list("potableWater"),
        ]);
        fields
    };

    let contacts = vec![
        Field::array(
            "phoneNumbers",
            Rule::object(texts(&["phoneNumber", "description", "extension", "type"])),
        ),
        Field::array(
            "emailAddresses",
            Rule::object(texts(&["description", "emailAddress"])),
        ),
    ];

    let fee = texts(&["cost", "description", "title"]);

    let operating_hours = {
        let exception = vec![
            Field::object("exceptionHours", texts(&WEEKDAYS)),
            Field::text("startDate"),
            Field::text("name"),
            Field::text("endDate"),
        ];
        vec![
            Field::array("exceptions", Rule::object(exception)),
            Field::text("description"),
            Field::object("standardHours", texts(&WEEKDAYS)),
            Field::text("name"),
        ]
    };

    let address = texts(&[
        "postalCode",
        "city",
        "stateCode",
        "countryCode",
        "provinceTerritoryCode",
        "line1",
        "type",
        "line3",
        "line2",
    ]);

    let image = vec![
        Field::text("credit"),
        Field::array("crops", Rule::Any),
        Field::text("title"),
        Field::text("altText"),
        Field::text("caption"),
        uri_text("url"),
    ];

    let site_counts = texts(&[
        "totalSites",
        "group",
        "horse",
        "tentOnly",
        "electricalHookups",
        "rvOnly",
        "walkBoatTo",
        "other",
    ]);

    let accessibility = {
        let mut fields = texts(&[
            "wheelchairAccess",
            "internetInfo",
            "cellPhoneInfo",
            "fireStovePolicy",
            "rvAllowed",
            "rvInfo",
            "rvMaxLength",
            "additionalInfo",
            "trailerMaxLength",
            "adaInfo",
            "trailerAllowed",
        ]);
        fields.extend([string_list("accessRoads"), string_list("classifications")]);
        fields
    };

    ObjectSchema::new(vec![
        Field::string("id").format(StringFormat::Uuid4).required(),
        uri_text("url"),
        Field::text("name"),
        Field::string("parkCode")
            .format(StringFormat::ParkCode)
            .required(),
        Field::text("description"),
        numeric_text("latitude"),
        numeric_text("longitude"),
        Field::text("reservationInfo"),
        uri_text("reservationUrl"),
        uri_text("regulationsUrl"),
        Field::text("regulationsOverview"),
        Field::object("amenities", amenities),
        Field::object("contacts", contacts),
        Field::array("fees", Rule::object(fee)),
        Field::text("directionsOverview"),
        uri_text("directionsUrl"),
        Field::array("operatingHours", Rule::object(operating_hours)),
        Field::array("addresses", Rule::object(address)),
        Field::array("images", Rule::object(image)),
        Field::text("weatherOverview"),
        numeric_text("numberOfSitesReservable"),
        numeric_text("numberOfSitesFirstComeFirstServe"),
        Field::object("campsites", site_counts),
        Field::object("accessibility", accessibility),
        Field::text("designation"),
        Field::text("directionsInfo"),
        Field::text("ext"),
        Field::text("fullName"),
        Field::text("phoneNumber"),
        Field::text("weatherInfo"),
    ])
}
