//! News & reports teaser cards shown on the home page.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Report {
    pub id: &'static str,
    pub title: &'static str,
    pub date: &'static str,
    pub image: &'static str,
    pub excerpt: &'static str,
}

impl Report {
    /// Detail page for the "Read More" link.
    #[must_use]
    pub fn href(&self) -> String {
        format!("/news/{}", self.id)
    }
}

pub const REPORTS: &[Report] = &[
    Report {
        id: "1",
        title: "Global Sugar Market Trends",
        date: "April 5, 2025",
        image: "/8.jpg",
        excerpt: "Analysis of current market trends and future projections for the sugar industry.",
    },
    Report {
        id: "2",
        title: "Brazil Harvest Update",
        date: "March 28, 2025",
        image: "/9.jpg",
        excerpt: "Latest updates on Brazil's harvest season and its impact on global sugar supply.",
    },
    Report {
        id: "3",
        title: "Monthly Price Overview",
        date: "March 22, 2025",
        image: "/10.jpg",
        excerpt: "Current price movements for raw and refined sugar across major markets.",
    },
];
