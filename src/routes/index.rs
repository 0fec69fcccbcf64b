use askama::Template;
use axum::{extract::State, response::Html};

use crate::config::{ContactConfig, SiteConfig};
use crate::error::AppError;
use crate::routes::AppState;
use crate::routes::contact::ContactFormState;

pub struct ServiceCard {
    pub title: &'static str,
    pub bullets: &'static [&'static str],
}

pub struct ProjectCard {
    pub title: &'static str,
    pub description: &'static str,
    pub meta: &'static str,
}

pub struct ProcessStep {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct FactCard {
    pub title: &'static str,
    pub lines: &'static [&'static str],
}

pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

const SERVICES: &[ServiceCard] = &[
    ServiceCard {
        title: "NetSuite Admin + Dev",
        bullets: &[
            "Workflows & SuiteScript 2.x",
            "Advanced PDF/HTML",
            "Saved Searches & Dashboards",
            "WMS • Inbound Shipments",
            "Customer comms automation",
        ],
    },
    ServiceCard {
        title: "IT & Google Workspace",
        bullets: &[
            "Email/DNS/DMARC hygiene",
            "SSO and access control",
            "Device setup & policies",
            "Backups & uptime basics",
            "Docs & knowledge base",
        ],
    },
    ServiceCard {
        title: "Web Design / UX",
        bullets: &[
            "Single-page sites",
            "Landing pages",
            "Design systems",
            "Lightweight animations",
            "Content & SEO basics",
        ],
    },
];

const PROJECTS: &[ProjectCard] = &[
    ProjectCard {
        title: "Advanced PDF suite",
        description: "Quotation, Packing Slip, and auto-paginated templates with conditional tables and totals.",
        meta: "NetSuite • XML/FreeMarker",
    },
    ProjectCard {
        title: "Support Cases on NetSuite",
        description: "Email-to-case, SLAs, dashboards, and automated customer updates.",
        meta: "NetSuite • Workflows",
    },
    ProjectCard {
        title: "Inbound Shipments + WMS",
        description: "Cleaned legacy searches, implemented WMS with notifications to Sales and clients.",
        meta: "NetSuite • WMS",
    },
];

const PROCESS: &[ProcessStep] = &[
    ProcessStep {
        number: "01",
        title: "Scope",
        description: "We clarify goals, constraints, and success metrics.",
    },
    ProcessStep {
        number: "02",
        title: "Build",
        description: "Implement with small, reviewable increments.",
    },
    ProcessStep {
        number: "03",
        title: "Ship",
        description: "Deploy safely with rollback in mind.",
    },
    ProcessStep {
        number: "04",
        title: "Support",
        description: "Measure, iterate, document.",
    },
];

const FACTS: &[FactCard] = &[
    FactCard {
        title: "Experience",
        lines: &[
            "10+ years in tech; 5+ in NetSuite",
            "De-facto IT & Systems Admin at WOG (Dubai/JAFZA)",
            "Hands-on with Sales, Ops, Finance, Logistics",
        ],
    },
    FactCard {
        title: "Focus",
        lines: &[
            "Stability first; clear docs",
            "Automation before headcount",
            "Minimal UI, fast responses",
        ],
    },
    FactCard {
        title: "Stack",
        lines: &[
            "NetSuite (SuiteScript 2.x, Workflows, PDF/HTML)",
            "Google Workspace, DNS/DMARC, SSO basics",
            "HTML/CSS/JS, React, Tailwind",
        ],
    },
];

const STATS: &[Stat] = &[
    Stat {
        label: "Years in Tech",
        value: "10+",
    },
    Stat {
        label: "NetSuite Focus",
        value: "5+ yrs",
    },
    Stat {
        label: "Departments Served",
        value: "Ops • Sales • Finance",
    },
];

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub site: SiteConfig,
    pub contact: ContactConfig,
    pub form: ContactFormState,
    pub services: &'static [ServiceCard],
    pub projects: &'static [ProjectCard],
    pub process: &'static [ProcessStep],
    pub facts: &'static [FactCard],
    pub stats: &'static [Stat],
    pub year: i32,
}

/// Render the full page around the given contact form state.
pub(crate) fn render_page(
    state: &AppState,
    form: ContactFormState,
) -> Result<Html<String>, AppError> {
    let template = IndexTemplate {
        site: state.config.site.clone(),
        contact: state.config.contact.clone(),
        form,
        services: SERVICES,
        projects: PROJECTS,
        process: PROCESS,
        facts: FACTS,
        stats: STATS,
        year: time::OffsetDateTime::now_utc().year(),
    };

    Ok(Html(template.render()?))
}

/// GET / - The page, contact form Idle.
pub async fn page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render_page(&state, ContactFormState::idle())
}
