//! Company profile, contact details, and footer link lists.

pub const COMPANY_NAME: &str = "SEBAT Group International";
pub const FOUNDED: &str = "2000";

pub const TAGLINE: &str = "A leading international trader in sugar and other commodities since 2000, connecting suppliers and importers across global markets.";

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "Our Group is in International Commodity trading since early 2000. The Group set up SEBAT only for international commodity trading specially for Sugar trading. Today, SEBAT is one of the leading sugar traders and has been serving clients through out the world.",
    "SEBAT is offering continuous supply of the full range of sugars including Refined, Crystal, Brown, Cube shaped from different origins like Brazil, India, Thai, Mexico. SEBAT has been a strong bridge between suppliers and buyers across the globe.",
    "SEBAT is also trading in sunflower oil, flour, coffee.",
    "Our traders are dedicated to specific markets, having built strong direct relationships with refineries, growers and exporters in EU, Brazil, Thailand, and India, and with importers in Africa, the Middle East and Asia.",
];

/// Headline figure shown over the about-us image.
#[derive(Clone, Copy, Debug)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { value: "20+", label: "Years Experience" },
    Stat { value: "50+", label: "Global Partners" },
];

#[derive(Clone, Copy, Debug)]
pub struct Feature {
    pub title: &'static str,
    pub text: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature { title: "Quality Products", text: "Premium sugar solutions from trusted global sources" },
    Feature { title: "Global Network", text: "Strong connections across major markets worldwide" },
];

pub const ADDRESS_LINES: &[&str] = &[
    "Unit No: 3O-01-BA903",
    "Jewellery & Gemplex 3",
    "Plot No: DMCC-PH2-J&GPlexS",
    "Jewellery & Gemplex",
    "Dubai, United Arab Emirates",
];

pub const PHONE_DISPLAY: &str = "+971 5XX XXX XXXX";
pub const PHONE_HREF: &str = "tel:+9715xxxxxxxx";
pub const EMAIL: &str = "info@sebatgroup.com";

pub const BUSINESS_HOURS: &[&str] = &[
    "Monday - Friday: 9:00 AM - 6:00 PM",
    "Saturday: 10:00 AM - 2:00 PM",
    "Sunday: Closed",
];

pub const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m14!1m8!1m3!1d28911.84259623539!2d55.141187!3d25.068656!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x0%3A0xdc22defd3201061c!2sDubai%20Multi%20Commodities%20Centre%20Authority!5e0!3m2!1sen!2str!4v1623136242588!5m2!1sen!2str";

#[derive(Clone, Copy, Debug)]
pub struct SocialLink {
    pub name: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { name: "Facebook", href: "#" },
    SocialLink { name: "Twitter", href: "#" },
    SocialLink { name: "Instagram", href: "#" },
    SocialLink { name: "LinkedIn", href: "#" },
];

pub const QUICK_LINKS: &[&str] = &["Home", "About Us", "Services", "Products", "News & Reports", "Contact"];

pub const PRODUCTS: &[&str] = &[
    "Refined Sugar",
    "Crystal Sugar",
    "Brown Sugar",
    "Cube Sugar",
    "Sunflower Oil",
    "Flour",
    "Coffee",
];

pub const LEGAL_LINKS: &[(&str, &str)] = &[
    ("Privacy Policy", "/privacy-policy"),
    ("Terms of Service", "/terms-of-service"),
    ("Cookies Policy", "/cookies-policy"),
];

/// Footer path for a quick link label.
#[must_use]
pub fn quick_link_href(label: &str) -> String {
    format!("/{}", super::slugify(label))
}

/// Footer path for a product label.
#[must_use]
pub fn product_href(label: &str) -> String {
    format!("/products/{}", super::slugify(label))
}
