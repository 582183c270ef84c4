use crate::entities::{case_studies, prelude::*, projects};
use chrono::Utc;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, Set};
use tracing::info;
use uuid::Uuid;

/// Seeds the starter projects and case studies the site ships with, so a
/// fresh install renders a populated portfolio. Seeded rows get generated
/// ids like any other row. No-op once either collection has content.
pub async fn seed_initial_content(db: &DatabaseConnection) -> anyhow::Result<()> {
    seed_projects(db).await?;
    seed_case_studies(db).await?;
    Ok(())
}

async fn seed_projects(db: &DatabaseConnection) -> anyhow::Result<()> {
    if Projects::find().count(db).await? > 0 {
        return Ok(());
    }

    let defaults: Vec<(&str, &str, Vec<&str>)> = vec![
        (
            "E-Commerce Platform",
            "A modern e-commerce solution with React and Node.js",
            vec!["React", "Node.js", "MongoDB"],
        ),
        (
            "Task Management App",
            "Full-stack application with real-time updates",
            vec!["Next.js", "TypeScript", "PostgreSQL"],
        ),
        (
            "AI Chat Application",
            "Intelligent chatbot with machine learning",
            vec!["Python", "TensorFlow", "FastAPI"],
        ),
        (
            "Mobile App",
            "Cross-platform mobile application",
            vec!["React Native", "Firebase", "Redux"],
        ),
        (
            "Data Dashboard",
            "Real-time analytics and visualization",
            vec!["Vue.js", "D3.js", "Express"],
        ),
        (
            "Blockchain App",
            "Decentralized application on Ethereum",
            vec!["Solidity", "Web3.js", "React"],
        ),
    ];

    let now = Utc::now();
    let models = defaults.into_iter().map(|(name, description, techs)| {
        projects::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            name: Set(name.to_string()),
            description: Set(description.to_string()),
            technologies: Set(serde_json::json!(techs)),
            image_url: Set(None),
            featured_media_id: Set(None),
            live_url: Set(Some("#".to_string())),
            github_url: Set(Some("#".to_string())),
            project_date: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        }
    });

    Projects::insert_many(models).exec(db).await?;
    info!("🌱 Seeded default projects");
    Ok(())
}

async fn seed_case_studies(db: &DatabaseConnection) -> anyhow::Result<()> {
    if CaseStudies::find().count(db).await? > 0 {
        return Ok(());
    }

    struct SeedCaseStudy {
        title: &'static str,
        subtitle: &'static str,
        role: &'static str,
        description: &'static str,
        challenge: &'static str,
        solution: &'static str,
        result: &'static str,
        technologies: Vec<&'static str>,
        project_date: &'static str,
    }

    let defaults = vec![
        SeedCaseStudy {
            title: "ISP Website Redesign",
            subtitle: "Ripple Networks ISP",
            role: "Project Manager & Multimedia Specialist",
            description: "Led the full digital transformation of Ripple Networks, an Australian ISP, turning an outdated website into a competitive, sales-ready brand.",
            challenge: "Outdated site, no brand identity or SEO. No reviews or testimonials, weak lead generation. Low visibility against larger competitors.",
            solution: "Managed a 3-person team using Agile/Kanban. Created a mascot plus AI-driven videos and animations. Redesigned the site with FAQs, testimonials, business plans, and a 3-step signup flow. Planned SEO and sales funnels.",
            result: "Boosted visibility with SEO and optimized content. Higher conversions with CTAs, funnels, and modem upsells. Positioned the brand as marketing-ready and competitive.",
            technologies: vec!["React", "Node.js", "MongoDB", "AWS"],
            project_date: "2024-01-15",
        },
        SeedCaseStudy {
            title: "AI-Powered Task Management",
            subtitle: "CS2",
            role: "Full-Stack Developer",
            description: "Built an intelligent task management system that uses AI to prioritize tasks, suggest optimal workflows, and automate routine processes.",
            challenge: "Manual task prioritization, inefficient workflows",
            solution: "ML-powered prioritization, automated workflows",
            result: "50% time savings, 30% productivity increase",
            technologies: vec!["Next.js", "TypeScript", "TensorFlow", "PostgreSQL"],
            project_date: "2024-02-20",
        },
        SeedCaseStudy {
            title: "Real-Time Analytics Dashboard",
            subtitle: "CS3",
            role: "Backend Developer",
            description: "Developed a comprehensive analytics platform that processes millions of data points in real-time and provides actionable insights through interactive visualizations.",
            challenge: "Large data volumes, real-time processing needs",
            solution: "Stream processing, optimized queries, caching",
            result: "Sub-second query times, 99.9% uptime",
            technologies: vec!["Vue.js", "D3.js", "Kafka", "Redis"],
            project_date: "2024-03-10",
        },
    ];

    let now = Utc::now();
    let models = defaults.into_iter().map(|cs| case_studies::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        title: Set(cs.title.to_string()),
        subtitle: Set(cs.subtitle.to_string()),
        role: Set(cs.role.to_string()),
        description: Set(cs.description.to_string()),
        challenge: Set(cs.challenge.to_string()),
        solution: Set(cs.solution.to_string()),
        result: Set(cs.result.to_string()),
        technologies: Set(serde_json::json!(cs.technologies)),
        featured_media_id: Set(None),
        project_date: Set(cs.project_date.to_string()),
        created_at: Set(now),
        updated_at: Set(now),
    });

    CaseStudies::insert_many(models).exec(db).await?;
    info!("🌱 Seeded default case studies");
    Ok(())
}
