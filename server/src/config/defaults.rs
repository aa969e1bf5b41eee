//! Compiled-in site configuration defaults.

use serde_json::{Value, json};

use super::Configuration;

/// Build the default site configuration.
///
/// Called once at startup; the result is shared read-only for the lifetime
/// of the process.
pub fn default_config() -> Configuration {
    let value = json!({
        "name": "Hade",
        "description": "Cinematic web creator building immersive interfaces and premium digital vibes.",
        "place": "Morocco",
        "availability": "AVAILABLE NOW",
        "pfp": "/static/assets/pfp.svg",
        "video": "",
        "music": "",
        "accentColor": "#8e77ff",
        "aboutLines": [
            "Designing dark, cinematic interfaces.",
            "Motion-first frontend work."
        ],
        "links": [
            { "label": "Instagram", "url": "#" },
            { "label": "GitHub", "url": "#" },
            { "label": "TikTok", "url": "#" }
        ],
        "skills": ["UI/UX", "Motion", "Frontend", "Branding", "Creative Coding"],
        "projects": [
            {
                "title": "Cinematic Identity Landing",
                "description": "Dark visual-first personal page with premium interactions."
            },
            {
                "title": "Creator Profile System",
                "description": "Customizable social-first portfolio with backend-powered content."
            }
        ]
    });

    match value {
        Value::Object(map) => map,
        _ => Configuration::new(),
    }
}
