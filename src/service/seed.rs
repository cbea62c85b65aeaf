use crate::models::{
    Blog, Collection, ContactInfo, ContactSubmission, Developer, Project, ProjectStatus, Property,
    RecordMeta, Testimonial, WishlistEntry,
};
use crate::storage::PersistedStore;
use chrono::{DateTime, TimeZone, Utc};
use tracing::info;

/// Initial contents written to collections that do not exist yet
#[derive(Debug, Clone, Default)]
pub struct Seed {
    pub properties: Vec<Property>,
    pub projects: Vec<Project>,
    pub blogs: Vec<Blog>,
    pub developers: Vec<Developer>,
    pub testimonials: Vec<Testimonial>,
    pub contact_submissions: Vec<ContactSubmission>,
    pub wishlist: Vec<WishlistEntry>,
}

impl Seed {
    /// Every collection starts empty
    pub fn empty() -> Self {
        Self::default()
    }

    /// Showcase catalogue shipped with the site
    pub fn builtin() -> Self {
        Self {
            properties: builtin_properties(),
            projects: builtin_projects(),
            blogs: builtin_blogs(),
            developers: builtin_developers(),
            testimonials: builtin_testimonials(),
            contact_submissions: Vec::new(),
            wishlist: Vec::new(),
        }
    }

    pub(crate) fn apply(&self, store: &PersistedStore) {
        store.ensure_seeded(Collection::Properties.storage_key(), &self.properties);
        store.ensure_seeded(Collection::Projects.storage_key(), &self.projects);
        store.ensure_seeded(Collection::Blogs.storage_key(), &self.blogs);
        store.ensure_seeded(Collection::Developers.storage_key(), &self.developers);
        store.ensure_seeded(Collection::Testimonials.storage_key(), &self.testimonials);
        store.ensure_seeded(
            Collection::ContactSubmissions.storage_key(),
            &self.contact_submissions,
        );
        store.ensure_seeded(Collection::Wishlist.storage_key(), &self.wishlist);
        info!(
            properties = self.properties.len(),
            projects = self.projects.len(),
            blogs = self.blogs.len(),
            "Seed data applied"
        );
    }
}

fn seeded_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0)
        .single()
        .unwrap_or_default()
}

fn meta(id: &str) -> RecordMeta {
    RecordMeta::new(id, seeded_at())
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn builtin_properties() -> Vec<Property> {
    vec![
        Property {
            meta: meta("prop-1"),
            title: "Marina Gate Penthouse".to_string(),
            description: "Full-floor penthouse with wraparound terrace and marina views.".to_string(),
            price: 12_500_000,
            location: "Dubai Marina".to_string(),
            category: "exclusive".to_string(),
            property_type: "penthouse".to_string(),
            status: "for-sale".to_string(),
            bedrooms: Some(4),
            bathrooms: Some(5),
            area_sqft: Some(5_200.0),
            amenities: strings(&["Private pool", "Concierge", "Gym"]),
            images: strings(&["/images/properties/marina-gate.jpg"]),
            featured: true,
            developer_id: Some("dev-2".to_string()),
        },
        Property {
            meta: meta("prop-2"),
            title: "Downtown Boulevard Apartment".to_string(),
            description: "Two-bedroom apartment a short walk from the Dubai Mall.".to_string(),
            price: 2_850_000,
            location: "Downtown Dubai".to_string(),
            category: "ready".to_string(),
            property_type: "apartment".to_string(),
            status: "for-sale".to_string(),
            bedrooms: Some(2),
            bathrooms: Some(3),
            area_sqft: Some(1_450.0),
            amenities: strings(&["Pool", "Parking"]),
            images: strings(&["/images/properties/boulevard.jpg"]),
            featured: true,
            developer_id: Some("dev-1".to_string()),
        },
        Property {
            meta: meta("prop-3"),
            title: "Palm Jumeirah Signature Villa".to_string(),
            description: "Beachfront villa on the fronds with private beach access.".to_string(),
            price: 38_000_000,
            location: "Palm Jumeirah".to_string(),
            category: "exclusive".to_string(),
            property_type: "villa".to_string(),
            status: "for-sale".to_string(),
            bedrooms: Some(6),
            bathrooms: Some(7),
            area_sqft: Some(11_000.0),
            amenities: strings(&["Private beach", "Cinema", "Staff quarters"]),
            images: strings(&["/images/properties/palm-villa.jpg"]),
            featured: false,
            developer_id: Some("dev-2".to_string()),
        },
        Property {
            meta: meta("prop-4"),
            title: "Creek Harbour Off-Plan Residence".to_string(),
            description: "One-bedroom residence with a post-handover payment plan.".to_string(),
            price: 1_350_000,
            location: "Dubai Creek Harbour".to_string(),
            category: "offplan".to_string(),
            property_type: "apartment".to_string(),
            status: "off-plan".to_string(),
            bedrooms: Some(1),
            bathrooms: Some(1),
            area_sqft: Some(780.0),
            amenities: strings(&["Park", "Retail podium"]),
            images: strings(&["/images/properties/creek-harbour.jpg"]),
            featured: false,
            developer_id: Some("dev-1".to_string()),
        },
    ]
}

fn builtin_projects() -> Vec<Project> {
    vec![
        Project {
            meta: meta("proj-1"),
            name: "Creek Vista Towers".to_string(),
            description: "Twin towers overlooking the creek and the wildlife sanctuary.".to_string(),
            location: "Dubai Creek Harbour".to_string(),
            developer: "Emaar Properties".to_string(),
            status: ProjectStatus::Ongoing,
            starting_price: Some(1_200_000),
            completion_date: Some("Q4 2026".to_string()),
            images: strings(&["/images/projects/creek-vista.jpg"]),
            amenities: strings(&["Infinity pool", "Kids play area"]),
            featured: true,
        },
        Project {
            meta: meta("proj-2"),
            name: "Palm Crown Residences".to_string(),
            description: "Limited collection of beachfront residences.".to_string(),
            location: "Palm Jumeirah".to_string(),
            developer: "Nakheel".to_string(),
            status: ProjectStatus::Upcoming,
            starting_price: Some(6_500_000),
            completion_date: Some("Q2 2028".to_string()),
            images: strings(&["/images/projects/palm-crown.jpg"]),
            amenities: strings(&["Beach club", "Spa"]),
            featured: false,
        },
        Project {
            meta: meta("proj-3"),
            name: "Marina Heights".to_string(),
            description: "Completed tower with serviced apartments.".to_string(),
            location: "Dubai Marina".to_string(),
            developer: "Select Group".to_string(),
            status: ProjectStatus::Completed,
            starting_price: Some(1_750_000),
            completion_date: Some("Q1 2023".to_string()),
            images: strings(&["/images/projects/marina-heights.jpg"]),
            amenities: strings(&["Gym", "Sky lounge"]),
            featured: false,
        },
    ]
}

fn builtin_blogs() -> Vec<Blog> {
    vec![
        Blog {
            meta: meta("blog-1"),
            title: "Dubai Property Market Outlook".to_string(),
            content: "Transaction volumes kept rising through the last quarter.".to_string(),
            category: "Market Insights".to_string(),
            author: "Research Desk".to_string(),
            tags: strings(&["market", "dubai"]),
            image_url: Some("/images/blog/outlook.jpg".to_string()),
            published: true,
        },
        Blog {
            meta: meta("blog-2"),
            title: "Buying Off-Plan: What to Check".to_string(),
            content: "Escrow accounts, payment plans and handover dates.".to_string(),
            category: "Guides".to_string(),
            author: "Advisory Team".to_string(),
            tags: strings(&["offplan", "guide"]),
            image_url: None,
            published: true,
        },
    ]
}

fn builtin_developers() -> Vec<Developer> {
    vec![
        Developer {
            meta: meta("dev-1"),
            name: "Emaar Properties".to_string(),
            description: "Master developer behind Downtown Dubai and Creek Harbour.".to_string(),
            logo: Some("/images/partners/emaar.png".to_string()),
            website: Some("https://www.emaar.com".to_string()),
            established_year: Some(1997),
            projects_count: 120,
            contact_info: ContactInfo {
                email: "sales@emaar.example".to_string(),
                mobile_no: "+971 4 000 0001".to_string(),
                ..Default::default()
            },
        },
        Developer {
            meta: meta("dev-2"),
            name: "Nakheel".to_string(),
            description: "Developer of Palm Jumeirah and waterfront communities.".to_string(),
            logo: Some("/images/partners/nakheel.png".to_string()),
            website: Some("https://www.nakheel.com".to_string()),
            established_year: Some(2000),
            projects_count: 45,
            contact_info: ContactInfo {
                email: "sales@nakheel.example".to_string(),
                ..Default::default()
            },
        },
    ]
}

fn builtin_testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            meta: meta("testi-1"),
            name: "Sara K.".to_string(),
            email: String::new(),
            comments: "Found our family home in two weeks. Smooth from viewing to transfer."
                .to_string(),
            designation: "Homeowner".to_string(),
            image: None,
            rating: Some(5),
            approved: true,
        },
        Testimonial {
            meta: meta("testi-2"),
            name: "Omar R.".to_string(),
            email: String::new(),
            comments: "Clear advice on off-plan payment plans.".to_string(),
            designation: "Investor".to_string(),
            image: None,
            rating: Some(4),
            approved: true,
        },
    ]
}
