//! Pitch Content
//!
//! Static copy for the deck screens. Plain data only; presentation is the
//! frontend's job.

pub const PRODUCT_NAME: &str = "DIWAY";
pub const PRODUCT_TAGLINE: &str = "AI control loop for development management";

pub const CHAT_GREETING: &str = "Ask about your project: I will show where the product finds \
                                 losses and how it confirms them in the field.";
pub const CHAT_PLACEHOLDER: &str =
    "For example: how fast can we connect 1C and photo capture for a pilot?";

/// One step of the value story
#[derive(Clone, Copy, Debug)]
pub struct StoryStep {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub bullets: &'static [&'static str],
}

pub const STORY_STEPS: [StoryStep; 5] = [
    StoryStep {
        id: "data",
        title: "1. Collect the developer's data",
        subtitle: "Documents, contracts, acts, correspondence, reports and statuses land in a \
                   single AI base.",
        bullets: &[
            "One model: project -> building -> contractor -> work -> money",
            "Documents and obligations linked to project entities",
            "Sources kept so every AI conclusion can be audited",
        ],
    },
    StoryStep {
        id: "loss",
        title: "2. Find losses in the paper trail",
        subtitle: "AI looks for gaps between plan, contract, acts and payments before they turn \
                   into cash losses.",
        bullets: &[
            "Overpayment risks and unconfirmed work volumes",
            "Ambiguous terms in briefs and contracts",
            "Schedule-slip signals in the document trail",
        ],
    },
    StoryStep {
        id: "reasons",
        title: "3. Explain the causes",
        subtitle: "The system explains why a risk appeared, what inaction costs and where to \
                   intervene first.",
        bullets: &[
            "Cause -> consequence -> money effect",
            "Prioritized by criticality and reaction window",
            "Recommended management action",
        ],
    },
    StoryStep {
        id: "fact",
        title: "4. Connect field evidence",
        subtitle: "Photos, video, field reports, feedback, CRM and sensors verify the \
                   hypotheses.",
        bullets: &[
            "Plan and documents checked against the field",
            "Early confirmation of on-site deviations",
            "Evidence base for disputed payments",
        ],
    },
    StoryStep {
        id: "cockpit",
        title: "5. Management AI cockpit",
        subtitle: "The director gets one screen: where the risks are, what they cost and which \
                   decisions pay off.",
        bullets: &[
            "One project radar for schedule, money and risk",
            "AI dialogue per role: director, site, finance",
            "Visitor questions accumulate as a product backlog",
        ],
    },
];

/// The sample project card shown on the story screen
#[derive(Clone, Copy, Debug)]
pub struct ProjectCard {
    pub name: &'static str,
    pub phase: &'static str,
    /// Health index, 0-100
    pub health: u8,
    pub risk_level: &'static str,
    pub potential_loss: &'static str,
    pub schedule_risk: &'static str,
    pub hotspots: &'static [&'static str],
}

pub const PROJECT_CARD: ProjectCard = ProjectCard {
    name: "Northern Quarter residential complex",
    phase: "Structural frame + utilities",
    health: 72,
    risk_level: "Medium",
    potential_loss: "₽14.6M",
    schedule_risk: "3-4 weeks",
    hotspots: &[
        "Unconfirmed work volumes in the acts",
        "Utility costs trending up",
        "Finishing in section B behind schedule",
    ],
};

/// A channel of field evidence
#[derive(Clone, Copy, Debug)]
pub struct FactChannel {
    pub icon: &'static str,
    pub label: &'static str,
}

pub const FACT_CHANNELS: [FactChannel; 4] = [
    FactChannel { icon: "📷", label: "Photo capture" },
    FactChannel { icon: "📟", label: "Sensors" },
    FactChannel { icon: "💬", label: "Feedback" },
    FactChannel { icon: "🗄️", label: "CRM / 1C" },
];

/// One role-scoped agent in the showcase
#[derive(Clone, Copy, Debug)]
pub struct AgentProfile {
    pub name: &'static str,
    pub focus: &'static str,
    pub sample_question: &'static str,
}

pub const AGENTS: [AgentProfile; 3] = [
    AgentProfile {
        name: "Director agent",
        focus: "Portfolio risk, money effect and the decisions that pay off",
        sample_question: "Where do we lose the most this quarter?",
    },
    AgentProfile {
        name: "Site agent",
        focus: "Work volumes, field evidence and schedule deviations",
        sample_question: "Which acts are not confirmed by the field?",
    },
    AgentProfile {
        name: "Finance agent",
        focus: "Payments, contract terms and overpayment risks",
        sample_question: "Which payments run ahead of confirmed volumes?",
    },
];

/// Rollout status of a roadmap phase
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhaseStatus {
    Done,
    InProgress,
    Planned,
}

impl PhaseStatus {
    pub const fn label(self) -> &'static str {
        match self {
            PhaseStatus::Done => "Done",
            PhaseStatus::InProgress => "In progress",
            PhaseStatus::Planned => "Planned",
        }
    }
}

/// One phase of the rollout roadmap
#[derive(Clone, Copy, Debug)]
pub struct RoadmapPhase {
    pub title: &'static str,
    pub detail: &'static str,
    pub status: PhaseStatus,
}

pub const ROADMAP: [RoadmapPhase; 5] = [
    RoadmapPhase {
        title: "Developer data",
        detail: "Single AI base for documents, contracts and statuses",
        status: PhaseStatus::Done,
    },
    RoadmapPhase {
        title: "Paper losses",
        detail: "Plan / contract / act / payment cross-checks",
        status: PhaseStatus::Done,
    },
    RoadmapPhase {
        title: "Causes",
        detail: "Cause, consequence and money effect per risk",
        status: PhaseStatus::InProgress,
    },
    RoadmapPhase {
        title: "Field evidence",
        detail: "Photo, video, sensor and CRM confirmation loop",
        status: PhaseStatus::Planned,
    },
    RoadmapPhase {
        title: "Management cockpit",
        detail: "Role-scoped AI dialogue and the project radar",
        status: PhaseStatus::Planned,
    },
];

/// One slide of the clickable deck
#[derive(Clone, Debug)]
pub struct Slide {
    pub kicker: &'static str,
    pub title: &'static str,
    pub points: Vec<&'static str>,
}

/// The clickable deck: cover, one slide per story step, closing slide
pub fn deck_slides() -> Vec<Slide> {
    let mut slides = vec![Slide {
        kicker: "From blind spots to managed reality",
        title: "AI control loop for a development project",
        points: vec![
            "Collect the developer's data first",
            "Find losses in the paper trail and confirm them in the field",
            "Show the director causes and actions, not just reports",
        ],
    }];

    for step in &STORY_STEPS {
        slides.push(Slide {
            kicker: "Value story",
            title: step.title,
            points: step.bullets.to_vec(),
        });
    }

    slides.push(Slide {
        kicker: "Why it holds together",
        title: "Money first, then manageability",
        points: vec![
            "Every risk priced in rubles, not in status colors",
            "Every conclusion backed by a source document or field evidence",
            "The page itself follows the pitch: data, losses, causes, field, cockpit",
        ],
    });

    slides
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deck_wraps_the_story() {
        let slides = deck_slides();
        assert_eq!(slides.len(), STORY_STEPS.len() + 2);
        assert_eq!(slides[1].title, STORY_STEPS[0].title);
    }
}
