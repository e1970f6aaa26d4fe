//! Main navigation tree: top-level entries with one level of children.

/// A node of the navigation tree. Leaves have an empty `children` slice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub label: &'static str,
    pub path: &'static str,
    pub children: &'static [NavEntry],
}

impl NavEntry {
    /// Leaf entry with no submenu.
    #[must_use]
    pub const fn leaf(label: &'static str, path: &'static str) -> Self {
        Self { label, path, children: &[] }
    }

    #[must_use]
    pub const fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Stable DOM id for the mobile submenu of this entry.
    #[must_use]
    pub fn submenu_id(&self) -> String {
        format!("mobile-submenu-{}", super::slugify(self.label))
    }
}

pub const NAV_TREE: &[NavEntry] = &[
    NavEntry {
        label: "Home",
        path: "/",
        children: &[
            NavEntry::leaf("Welcome", "/"),
            NavEntry::leaf("Features", "/features"),
            NavEntry::leaf("Highlights", "/highlights"),
        ],
    },
    NavEntry {
        label: "About Us",
        path: "/about",
        children: &[
            NavEntry::leaf("Who We Are", "/about/who-we-are"),
            NavEntry::leaf("Our Values", "/about/values"),
            NavEntry::leaf("Management", "/about/management"),
            NavEntry::leaf("History", "/about/history"),
        ],
    },
    NavEntry {
        label: "Sugar",
        path: "/sugar",
        children: &[
            NavEntry::leaf("Products", "/sugar/products"),
            NavEntry::leaf("Manufacturing", "/sugar/manufacturing"),
            NavEntry::leaf("Quality Control", "/sugar/quality"),
            NavEntry::leaf("Applications", "/sugar/applications"),
        ],
    },
    NavEntry {
        label: "Prices",
        path: "/prices",
        children: &[
            NavEntry::leaf("Current Prices", "/prices/current"),
            NavEntry::leaf("Price Trends", "/prices/trends"),
            NavEntry::leaf("Bulk Orders", "/prices/bulk"),
        ],
    },
    NavEntry {
        label: "Related Links",
        path: "/links",
        children: &[
            NavEntry::leaf("Industry News", "/links/news"),
            NavEntry::leaf("Partners", "/links/partners"),
            NavEntry::leaf("Resources", "/links/resources"),
        ],
    },
    NavEntry {
        label: "Reports",
        path: "/reports",
        children: &[
            NavEntry::leaf("Annual Reports", "/reports/annual"),
            NavEntry::leaf("Market Analysis", "/reports/market"),
            NavEntry::leaf("Sustainability", "/reports/sustainability"),
        ],
    },
    NavEntry {
        label: "Gallery",
        path: "/gallery",
        children: &[
            NavEntry::leaf("Facilities", "/gallery/facilities"),
            NavEntry::leaf("Products", "/gallery/products"),
            NavEntry::leaf("Events", "/gallery/events"),
        ],
    },
    NavEntry {
        label: "Contact Us",
        path: "/contactus",
        children: &[
            NavEntry::leaf("Get in Touch", "/contactus"),
            NavEntry::leaf("Locations", "/contact/locations"),
            NavEntry::leaf("Careers", "/contact/careers"),
        ],
    },
];
