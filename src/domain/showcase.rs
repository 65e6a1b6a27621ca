//! Built-in posts for `frontpage tui --demo`.

use crate::domain::Post;

const SHOWCASE: &[(&str, &str, &str)] = &[
    (
        "Unlocking Business Efficiency with SaaS Solutions",
        "Discover how modern SaaS platforms are revolutionizing operational workflows and driving unprecedented efficiency across organizations worldwide.",
        "2024-01-05T09:00:00.000Z",
    ),
    (
        "Mastering UI Elements: A Practical Guide for Designers",
        "Dive deep into the world of UI interfaces with our expert guides. Learn the latest trends and practical tips to elevate your design skills.",
        "2024-01-12T09:00:00.000Z",
    ),
    (
        "Crafting Seamless Experiences: The Art of Intuitive UI Design",
        "Explore the principles and techniques behind user-centric UI design. Learn how to create interfaces that feel effortless and intuitive.",
        "2024-02-02T09:00:00.000Z",
    ),
    (
        "Beyond Aesthetics: The Power of Emotional UX Design",
        "Delve into the emotional aspects of UX design. Discover how to incorporate empathy and psychology into your design process.",
        "2024-02-20T09:00:00.000Z",
    ),
    (
        "Revolutionizing industries through SaaS implementation",
        "How subscription software changes the way whole industries buy, deploy and operate their tools.",
        "2024-03-01T09:00:00.000Z",
    ),
    (
        "Synergizing SaaS and UX design for elevating digital experiences",
        "Product and design teams working from the same playbook ship calmer, clearer software.",
        "2024-03-15T09:00:00.000Z",
    ),
    (
        "Navigating SaaS waters with intuitive UI and UX",
        "A field guide to onboarding flows, empty states and the small details users remember.",
        "2024-04-02T09:00:00.000Z",
    ),
    (
        "Sculpting SaaS success - the art of UI and UX design",
        "Visual hierarchy, pacing and feedback loops that keep people moving through a product.",
        "2024-04-18T09:00:00.000Z",
    ),
];

/// Static posts in the canonical shape, ordered as a backend would return them.
pub fn posts() -> Vec<Post> {
    SHOWCASE
        .iter()
        .enumerate()
        .map(|(i, (title, content, created_at))| Post {
            id: (i + 1).to_string(),
            title: title.to_string(),
            content: content.to_string(),
            // Empty URL: demo cards render the fallback image.
            image: String::new(),
            created_at: created_at.to_string(),
        })
        .collect()
}
