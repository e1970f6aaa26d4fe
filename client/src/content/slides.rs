//! Hero carousel slides, in display order.

use super::Action;

/// Time each slide stays on screen before the carousel advances.
pub const SLIDE_DURATION_MS: f64 = 5000.0;

/// One entry of the hero carousel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slide {
    pub image: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub primary: Action,
    pub secondary: Action,
}

pub const SLIDES: &[Slide] = &[
    Slide {
        image: "/3.jpeg",
        title: "Premium Sugar Solutions",
        description: "Elevating industry standards with high-quality sugar products and tailored solutions for diverse business needs.",
        primary: Action { label: "Contact Us", href: "/contact" },
        secondary: Action { label: "Explore Products", href: "/products" },
    },
    Slide {
        image: "/4.jpeg",
        title: "Sustainable Production",
        description: "Leading the way in environmentally conscious sugar processing with state-of-the-art technology and responsible practices.",
        primary: Action { label: "Our Process", href: "/process" },
        secondary: Action { label: "Sustainability", href: "/sustainability" },
    },
    Slide {
        image: "/5.jpeg",
        title: "Global Distribution Network",
        description: "Delivering premium sugar products worldwide with efficiency and reliability through our extensive logistics network.",
        primary: Action { label: "Our Reach", href: "/distribution" },
        secondary: Action { label: "Become a Partner", href: "/partners" },
    },
];
