//! `Resource` impls for every backend collection the console manages.
//!
//! Endpoint spellings (`/sponser`, `/eventVenue/`) and part names are the
//! backend's; keep them verbatim.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use super::draft::Row;
use super::{AfterDelete, BodyKind, Capabilities, Cell, Draft, FieldKind, FieldSpec, Resource, RowColumn, RowInput};
use crate::net::envelope::Envelope;
use crate::net::types::{
    AboutContent, AgendaContent, EventRecord, EventRef, GalleryItem, HomeContent, Inquiry, NavItem, PricePlan,
    Registration, Speaker, Sponsor, Venue,
};
use crate::util::format::{date_input_value, display_date, display_list, display_timestamp, or_dash, upload_url};

const SPEAKER_TYPES: &[(&str, &str)] = &[("speaker", "Speaker"), ("mentor", "Mentor")];
const SPONSOR_CATEGORIES: &[(&str, &str)] = &[("section 1", "Section 1"), ("section 2", "Section 2")];
const GALLERY_CATEGORIES: &[(&str, &str)] =
    &[("section 1", "Section 1"), ("section 2", "Section 2"), ("section 3", "Section 3")];

fn image_cell(stored: Option<&str>) -> Cell {
    Cell::Image(stored.filter(|s| !s.trim().is_empty()).map(upload_url))
}

/// Populated event title, or "N/A" for a bare id or missing reference.
fn event_title(event: Option<&EventRef>) -> String {
    event
        .and_then(EventRef::title)
        .filter(|title| !title.trim().is_empty())
        .map_or_else(|| "N/A".to_owned(), str::to_owned)
}

// =============================================================
// Events
// =============================================================

impl Resource for EventRecord {
    const LABEL: &'static str = "event";
    const TITLE: &'static str = "Event List";
    const LIST_PATH: &'static str = "/event/";
    const CREATE_PATH: &'static str = "/event/create";
    const ITEM_PATH: &'static str = "/event";
    const UPDATE_BODY: BodyKind = BodyKind::Json;
    const COLUMNS: &'static [&'static str] = &["Title", "Content", "Is Active", "Created At"];
    const SCHEMA: &'static [FieldSpec] = &[
        FieldSpec::new("title", "Title", FieldKind::Text),
        FieldSpec::new("content", "Content", FieldKind::LongText),
        FieldSpec::new("image", "Image", FieldKind::Image).create_only(),
        FieldSpec::new("startDate", "Start Date", FieldKind::Date),
        FieldSpec::new("endDate", "End Date", FieldKind::Date),
        FieldSpec::new("isActive", "Status", FieldKind::Active),
    ];

    fn id(&self) -> &str {
        &self.id
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::Text(self.title.clone()),
            Cell::Text(self.content.clone()),
            Cell::Status(self.is_active),
            Cell::Text(display_date(self.created_at.as_deref())),
        ]
    }

    fn to_draft(&self) -> Draft {
        Draft::default()
            .with_text("title", &self.title)
            .with_text("content", &self.content)
            .with_text("startDate", date_input_value(self.start_date.as_deref().unwrap_or_default()))
            .with_text("endDate", date_input_value(self.end_date.as_deref().unwrap_or_default()))
            .with_flag("isActive", self.is_active)
            .with_existing_image("image", self.image.as_deref())
    }
}

// =============================================================
// Speakers
// =============================================================

impl Resource for Speaker {
    const LABEL: &'static str = "speaker";
    const TITLE: &'static str = "Speakers";
    const LIST_PATH: &'static str = "/speakers";
    const CREATE_PATH: &'static str = "/speakers";
    const ITEM_PATH: &'static str = "/speakers";
    const ENVELOPE: Envelope = Envelope::Wrapped;
    const COLUMNS: &'static [&'static str] = &["Image", "Name", "Email", "Type", "Status", "Created At"];
    const SCHEMA: &'static [FieldSpec] = &[
        FieldSpec::new("type", "Type", FieldKind::Choice(SPEAKER_TYPES)),
        FieldSpec::new("name", "Name", FieldKind::Text),
        FieldSpec::new("phone", "Phone", FieldKind::Text),
        FieldSpec::new("email", "Email", FieldKind::Email),
        FieldSpec::new("youTubeLink", "YouTube Link", FieldKind::Text),
        FieldSpec::new("instagramLink", "Instagram Link", FieldKind::Text),
        FieldSpec::new("TwitterLink", "Twitter Link", FieldKind::Text),
        FieldSpec::new("LinkedinLink", "LinkedIn Link", FieldKind::Text),
        FieldSpec::new("BioGraphy", "Biography", FieldKind::LongText),
        FieldSpec::new("registeredAt", "Below Title", FieldKind::Text),
        FieldSpec::new("isActive", "Status", FieldKind::Active),
        FieldSpec::new("image", "Image", FieldKind::Image),
    ];

    fn id(&self) -> &str {
        &self.id
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            image_cell(self.img.as_deref()),
            Cell::Text(self.name.clone()),
            Cell::Text(self.email.clone()),
            Cell::Text(self.kind.clone()),
            Cell::Status(self.is_active),
            Cell::Text(display_date(self.created_at.as_deref())),
        ]
    }

    fn to_draft(&self) -> Draft {
        Draft::default()
            .with_text("type", &self.kind)
            .with_text("name", &self.name)
            .with_text("phone", &self.phone)
            .with_text("email", &self.email)
            .with_text("youTubeLink", &self.youtube_link)
            .with_text("instagramLink", &self.instagram_link)
            .with_text("TwitterLink", &self.twitter_link)
            .with_text("LinkedinLink", &self.linkedin_link)
            .with_text("BioGraphy", &self.biography)
            .with_text("registeredAt", &self.registered_at)
            .with_flag("isActive", self.is_active)
            .with_existing_image("image", self.img.as_deref())
    }
}

// =============================================================
// Sponsors
// =============================================================

impl Resource for Sponsor {
    const LABEL: &'static str = "sponsor";
    const TITLE: &'static str = "Sponsors";
    const LIST_PATH: &'static str = "/sponser/get";
    const CREATE_PATH: &'static str = "/sponser/create";
    const ITEM_PATH: &'static str = "/sponser";
    const COLUMNS: &'static [&'static str] = &["Logo", "Title", "Link", "Category", "Status"];
    const SCHEMA: &'static [FieldSpec] = &[
        FieldSpec::new("title", "Title", FieldKind::Text),
        FieldSpec::new("link", "Link", FieldKind::Text),
        FieldSpec::new("category", "Category", FieldKind::Choice(SPONSOR_CATEGORIES)),
        FieldSpec::new("isActive", "Status", FieldKind::Active),
        FieldSpec::new("image", "Logo", FieldKind::Image),
    ];

    fn id(&self) -> &str {
        &self.id
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            image_cell(self.image.as_deref()),
            Cell::Text(self.title.clone()),
            Cell::Link(self.link.clone()),
            Cell::Text(self.category.clone()),
            Cell::Status(self.is_active),
        ]
    }

    fn to_draft(&self) -> Draft {
        Draft::default()
            .with_text("title", &self.title)
            .with_text("link", &self.link)
            .with_text("category", &self.category)
            .with_flag("isActive", self.is_active)
            .with_existing_image("image", self.image.as_deref())
    }
}

// =============================================================
// Gallery
// =============================================================

impl Resource for GalleryItem {
    const LABEL: &'static str = "gallery item";
    const TITLE: &'static str = "Gallery";
    const LIST_PATH: &'static str = "/gallery/";
    const CREATE_PATH: &'static str = "/gallery/create";
    const ITEM_PATH: &'static str = "/gallery";
    const COLUMNS: &'static [&'static str] = &["Image", "Category", "Published At", "Status"];
    const SCHEMA: &'static [FieldSpec] = &[
        FieldSpec::new("image", "Image", FieldKind::Image),
        FieldSpec::new("publishedAt", "Published At", FieldKind::Date).create_only(),
        FieldSpec::new("category", "Category", FieldKind::Choice(GALLERY_CATEGORIES)),
        FieldSpec::new("isActive", "Status", FieldKind::Active),
    ];

    fn id(&self) -> &str {
        &self.id
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            image_cell(self.image.as_deref()),
            Cell::Text(self.category.clone()),
            Cell::Text(display_date(self.published_at.as_deref())),
            Cell::Status(self.is_active),
        ]
    }

    fn to_draft(&self) -> Draft {
        Draft::default()
            .with_text("category", &self.category)
            .with_flag("isActive", self.is_active)
            .with_existing_image("image", self.image.as_deref())
    }
}

// =============================================================
// Venues
// =============================================================

const VENUE_OFFERING_COLUMNS: &[RowColumn] = &[
    RowColumn { key: "startDate", label: "Start Date", input: RowInput::Date },
    RowColumn { key: "endDate", label: "End Date", input: RowInput::Date },
    RowColumn { key: "price", label: "Price", input: RowInput::Number },
];

impl Resource for Venue {
    const LABEL: &'static str = "event venue";
    const TITLE: &'static str = "Event Venues";
    const LIST_PATH: &'static str = "/eventVenue/";
    const CREATE_PATH: &'static str = "/eventVenue/";
    const ITEM_PATH: &'static str = "/eventVenue";
    const AFTER_DELETE: AfterDelete = AfterDelete::Prune;
    const COLUMNS: &'static [&'static str] = &["Image", "Event", "City", "Place", "Date", "Status"];
    const SCHEMA: &'static [FieldSpec] = &[
        FieldSpec::new("eventMasterItem", "Event", FieldKind::EventRef),
        FieldSpec::new("city", "City", FieldKind::Text),
        FieldSpec::new("place", "Place", FieldKind::Text),
        FieldSpec::new("map", "Map Link", FieldKind::Text),
        FieldSpec::new("date", "Date", FieldKind::Date),
        FieldSpec::new("isActive", "Status", FieldKind::Active),
        FieldSpec::new("offerings", "Offerings", FieldKind::Rows(VENUE_OFFERING_COLUMNS)).create_only(),
        FieldSpec::new("img", "Image", FieldKind::Image).create_only(),
        FieldSpec::new("image", "Image", FieldKind::Image).update_only(),
    ];

    fn id(&self) -> &str {
        &self.id
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            image_cell(self.img.as_deref()),
            Cell::Text(event_title(self.event_master_item.as_ref())),
            Cell::Text(self.city.clone()),
            Cell::Text(self.place.clone()),
            Cell::Text(display_date(self.date.as_deref())),
            Cell::Status(self.is_active),
        ]
    }

    fn to_draft(&self) -> Draft {
        Draft::default()
            .with_text("eventMasterItem", self.event_master_item.as_ref().map(EventRef::id).unwrap_or_default())
            .with_text("city", &self.city)
            .with_text("place", &self.place)
            .with_text("map", &self.map)
            .with_text("date", date_input_value(self.date.as_deref().unwrap_or_default()))
            .with_flag("isActive", self.is_active)
            .with_existing_image("image", self.img.as_deref())
    }
}

// =============================================================
// Pricing
// =============================================================

const PRICE_OFFERING_COLUMNS: &[RowColumn] =
    &[RowColumn { key: "description", label: "Description", input: RowInput::Text }];

impl Resource for PricePlan {
    const LABEL: &'static str = "event price";
    const TITLE: &'static str = "Event Pricing";
    const LIST_PATH: &'static str = "/eventPricing/";
    const CREATE_PATH: &'static str = "/eventPricing/create";
    const ITEM_PATH: &'static str = "/eventPricing";
    const AFTER_DELETE: AfterDelete = AfterDelete::Prune;
    const CREATE_BODY: BodyKind = BodyKind::Json;
    const UPDATE_BODY: BodyKind = BodyKind::Json;
    const COLUMNS: &'static [&'static str] = &["Event", "Title Top", "Title", "Price", "Slots", "Status", "Created At"];
    const SCHEMA: &'static [FieldSpec] = &[
        FieldSpec::new("eventMasterItem", "Event", FieldKind::EventRef),
        FieldSpec::new("titleTop", "Title Top", FieldKind::Text),
        FieldSpec::new("title", "Title", FieldKind::Text),
        FieldSpec::new("price", "Price", FieldKind::Number),
        FieldSpec::new("paymentLink", "Payment Link", FieldKind::Text),
        FieldSpec::new("slots", "Slots", FieldKind::Text),
        FieldSpec::new("offerings", "Offerings", FieldKind::Rows(PRICE_OFFERING_COLUMNS)),
        FieldSpec::new("isActive", "Status", FieldKind::Active),
    ];

    fn id(&self) -> &str {
        &self.id
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::Text(event_title(self.event_master_item.as_ref())),
            Cell::Text(self.title_top.clone()),
            Cell::Text(self.title.clone()),
            Cell::Text(self.price.clone()),
            Cell::Text(or_dash(&self.slots)),
            Cell::Status(self.is_active),
            Cell::Text(display_date(self.created_at.as_deref())),
        ]
    }

    fn to_draft(&self) -> Draft {
        let offerings: Vec<Row> = self
            .offerings
            .iter()
            .map(|o| Row::from([("description", o.description.clone())]))
            .collect();
        Draft::default()
            .with_text("eventMasterItem", self.event_master_item.as_ref().map(EventRef::id).unwrap_or_default())
            .with_text("titleTop", &self.title_top)
            .with_text("title", &self.title)
            .with_text("price", &self.price)
            .with_text("paymentLink", &self.payment_link)
            .with_text("slots", &self.slots)
            .with_rows("offerings", offerings)
            .with_flag("isActive", self.is_active)
    }
}

// =============================================================
// Page content
// =============================================================

impl Resource for HomeContent {
    const LABEL: &'static str = "home content";
    const TITLE: &'static str = "Home Page";
    const LIST_PATH: &'static str = "/home/";
    const ITEM_PATH: &'static str = "/home";
    const CAPABILITIES: Capabilities = Capabilities::EDIT_ONLY;
    const UPDATE_BODY: BodyKind = BodyKind::Json;
    const SINGLETON: bool = true;
    const COLUMNS: &'static [&'static str] = &["Content"];
    const SCHEMA: &'static [FieldSpec] = &[FieldSpec::new("home", "Content", FieldKind::LongText)];

    fn id(&self) -> &str {
        &self.id
    }

    fn cells(&self) -> Vec<Cell> {
        vec![Cell::Text(self.home.clone())]
    }

    fn to_draft(&self) -> Draft {
        Draft::default().with_text("home", &self.home)
    }
}

impl Resource for AboutContent {
    const LABEL: &'static str = "about content";
    const TITLE: &'static str = "About Page";
    const LIST_PATH: &'static str = "/about/";
    const ITEM_PATH: &'static str = "/about";
    const ENVELOPE: Envelope = Envelope::Wrapped;
    const CAPABILITIES: Capabilities = Capabilities::EDIT_ONLY;
    const SINGLETON: bool = true;
    const COLUMNS: &'static [&'static str] = &["Image", "Content"];
    const SCHEMA: &'static [FieldSpec] = &[
        FieldSpec::new("about", "Content", FieldKind::LongText),
        FieldSpec::new("image", "Image", FieldKind::Image),
    ];

    fn id(&self) -> &str {
        &self.id
    }

    fn cells(&self) -> Vec<Cell> {
        vec![image_cell(self.image.as_deref()), Cell::Text(self.about.clone())]
    }

    fn to_draft(&self) -> Draft {
        Draft::default()
            .with_text("about", &self.about)
            .with_existing_image("image", self.image.as_deref())
    }
}

impl Resource for AgendaContent {
    const LABEL: &'static str = "agenda content";
    const TITLE: &'static str = "Agenda Page";
    const LIST_PATH: &'static str = "/agenda/";
    const ITEM_PATH: &'static str = "/agenda";
    const CAPABILITIES: Capabilities = Capabilities::EDIT_ONLY;
    const UPDATE_BODY: BodyKind = BodyKind::Json;
    const SINGLETON: bool = true;
    const COLUMNS: &'static [&'static str] = &["Content"];
    const SCHEMA: &'static [FieldSpec] = &[FieldSpec::new("agenda", "Content", FieldKind::LongText)];

    fn id(&self) -> &str {
        &self.id
    }

    fn cells(&self) -> Vec<Cell> {
        vec![Cell::Text(self.agenda.clone())]
    }

    fn to_draft(&self) -> Draft {
        Draft::default().with_text("agenda", &self.agenda)
    }
}

// =============================================================
// Navigation
// =============================================================

impl Resource for NavItem {
    const LABEL: &'static str = "navigation";
    const TITLE: &'static str = "Navigation";
    const LIST_PATH: &'static str = "/navigation";
    const ITEM_PATH: &'static str = "/navigation";
    const CAPABILITIES: Capabilities = Capabilities::EDIT_ONLY;
    const UPDATE_BODY: BodyKind = BodyKind::Json;
    const COLUMNS: &'static [&'static str] = &["Label", "Visible"];
    const SCHEMA: &'static [FieldSpec] = &[FieldSpec::new("isActive", "Visible", FieldKind::Active)];

    fn id(&self) -> &str {
        &self.id
    }

    fn cells(&self) -> Vec<Cell> {
        vec![Cell::Text(self.label.clone()), Cell::Status(self.is_active)]
    }

    fn to_draft(&self) -> Draft {
        Draft::default().with_flag("isActive", self.is_active)
    }
}

// =============================================================
// Read-only submissions
// =============================================================

impl Resource for Registration {
    const LABEL: &'static str = "registration";
    const TITLE: &'static str = "Registrations";
    const LIST_PATH: &'static str = "/register";
    const ENVELOPE: Envelope = Envelope::Wrapped;
    const CAPABILITIES: Capabilities = Capabilities::READ_ONLY;
    const COLUMNS: &'static [&'static str] = &[
        "First Name",
        "Last Name",
        "Email",
        "Twitter",
        "Phone",
        "Emergency Contact",
        "Trading Years",
        "Country",
        "State",
        "City",
        "Capital Allocation",
        "Markets Traded",
        "Profile",
        "How They Heard",
        "Food Preferences",
        "Submitted At",
    ];

    fn id(&self) -> &str {
        &self.id
    }

    fn cells(&self) -> Vec<Cell> {
        let form = &self.data;
        vec![
            Cell::Text(or_dash(&form.first_name)),
            Cell::Text(or_dash(&form.last_name)),
            Cell::Text(or_dash(&form.email)),
            Cell::Text(or_dash(&form.twitter_id)),
            Cell::Text(or_dash(&form.phone_number)),
            Cell::Text(or_dash(&form.emergency_contact_number)),
            Cell::Text(or_dash(&form.trading_years)),
            Cell::Text(or_dash(&form.country)),
            Cell::Text(or_dash(&form.state)),
            Cell::Text(or_dash(&form.city)),
            Cell::Text(or_dash(&form.capital_allocation_trading)),
            Cell::Text(display_list(&form.market_traded)),
            Cell::Text(display_list(&form.profile)),
            Cell::Text(display_list(&form.how_to_know)),
            Cell::Text(display_list(&form.food_preferences)),
            Cell::Text(display_timestamp(self.created_at.as_deref())),
        ]
    }
}

impl Resource for Inquiry {
    const LABEL: &'static str = "inquiry";
    const TITLE: &'static str = "Inquiries";
    const LIST_PATH: &'static str = "/queries";
    const CAPABILITIES: Capabilities = Capabilities::READ_ONLY;
    const COLUMNS: &'static [&'static str] =
        &["Email Address", "Name", "Designation", "Contact", "Company Website", "Company Name", "Date"];

    fn id(&self) -> &str {
        &self.id
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::Text(or_dash(&self.email)),
            Cell::Text(or_dash(&self.name)),
            Cell::Text(or_dash(&self.designation)),
            Cell::Text(or_dash(&self.contact)),
            if self.website.trim().is_empty() {
                Cell::Text(or_dash(&self.website))
            } else {
                Cell::Link(self.website.clone())
            },
            Cell::Text(or_dash(&self.company_name)),
            Cell::Text(display_date(self.date.as_deref())),
        ]
    }
}
