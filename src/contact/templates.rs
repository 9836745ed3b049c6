use serde::{Deserialize, Serialize};

/// Stand-in used when the sender has not typed a name yet.
pub const NAME_PLACEHOLDER: &str = "[Your Name]";

const NAME_SLOT: &str = "{name}";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateCategory {
    #[default]
    Email,
    #[serde(alias = "linkedin")]
    Networking,
    Quick,
}

impl TemplateCategory {
    pub const ALL: [TemplateCategory; 3] = [
        TemplateCategory::Email,
        TemplateCategory::Networking,
        TemplateCategory::Quick,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TemplateCategory::Email => "Email Templates",
            TemplateCategory::Networking => "LinkedIn Messages",
            TemplateCategory::Quick => "Quick Notes",
        }
    }

    pub fn templates(&self) -> &'static [MessageTemplate] {
        match self {
            TemplateCategory::Email => &EMAIL_TEMPLATES,
            TemplateCategory::Networking => &NETWORKING_TEMPLATES,
            TemplateCategory::Quick => &QUICK_TEMPLATES,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageTemplate {
    pub name: &'static str,
    body: &'static str,
}

impl MessageTemplate {
    /// Fills every `{name}` slot with the sender's name, or the placeholder
    /// when it is blank.
    pub fn render(&self, sender: &str) -> String {
        let sender = if sender.is_empty() {
            NAME_PLACEHOLDER
        } else {
            sender
        };
        self.body.replace(NAME_SLOT, sender)
    }
}

static EMAIL_TEMPLATES: [MessageTemplate; 3] = [
    MessageTemplate {
        name: "Collaboration",
        body: "Subject: Collaboration Opportunity\n\nHi [Your Name],\n\nMy name is {name}, and I came across your impressive portfolio. I'm particularly interested in your work on [specific project].\n\nI'd love to discuss potential collaboration opportunities or partnership.\n\nBest regards,\n{name}",
    },
    MessageTemplate {
        name: "Job Inquiry",
        body: "Subject: Regarding Open Position\n\nHi [Your Name],\n\nI'm {name}, and I found your portfolio while researching talented developers. Your expertise in [technology] aligns perfectly with what we're looking for.\n\nAre you open to discussing new opportunities?\n\nBest,\n{name}",
    },
    MessageTemplate {
        name: "Feedback",
        body: "Subject: Portfolio Feedback\n\nHi [Your Name],\n\nI'm {name}. Just wanted to say your portfolio is fantastic! The [specific project] really caught my attention.\n\nWould love to learn more about your development process.\n\nCheers,\n{name}",
    },
];

static NETWORKING_TEMPLATES: [MessageTemplate; 3] = [
    MessageTemplate {
        name: "Professional",
        body: "Hi [Your Name],\n\nI'm {name}. I discovered your profile and was impressed by your work in [technology]. Your project on [specific work] is particularly interesting!\n\nI'd love to connect and potentially collaborate.\n\nBest regards,\n{name}",
    },
    MessageTemplate {
        name: "Networking",
        body: "Hello [Your Name]!\n\nMy name is {name}. I'm building my network in the [industry] space and came across your profile.\n\nYour experience with [skill] is exactly what I'm looking to learn more about. Let's connect!\n\n{name}",
    },
    MessageTemplate {
        name: "Mentorship",
        body: "Hi [Your Name],\n\nI'm {name}, and I'm really inspired by your career path. I'm particularly interested in [specific area].\n\nWould you be open to a quick chat? I'd love your advice.\n\nThank you,\n{name}",
    },
];

static QUICK_TEMPLATES: [MessageTemplate; 3] = [
    MessageTemplate {
        name: "Casual Intro",
        body: "Hey! \u{1F44B}\n\nI'm {name}. Love your work! Especially the [project name] - super cool implementation.\n\nLet's chat sometime!",
    },
    MessageTemplate {
        name: "Quick Connect",
        body: "Hi there!\n\n{name} here. Quick note to say your portfolio is awesome! Would be great to connect.\n\nCheers! \u{2728}",
    },
    MessageTemplate {
        name: "Direct",
        body: "Hello,\n\n{name} here. Impressed by your work. Available for a quick call this week?\n\nThanks!",
    },
];
