use chrono::{DateTime, TimeZone, Utc};

use crate::entities::project::{new_project_id, Project, ProjectCategory, ProjectStatus};

struct Seed {
    title: &'static str,
    description: &'static str,
    category: ProjectCategory,
    status: ProjectStatus,
    technologies: &'static [&'static str],
    image_seed: &'static str,
    demo_url: Option<&'static str>,
    github_url: Option<&'static str>,
    featured: bool,
    date: (i32, u32, u32),
}

impl Seed {
    fn build(self) -> Project {
        let date = seed_date(self.date);
        Project {
            id: new_project_id(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            category: self.category,
            status: self.status,
            technologies: self.technologies.iter().map(|t| t.to_string()).collect(),
            image_url: Some(format!(
                "https://picsum.photos/seed/{}/800/600",
                self.image_seed
            )),
            demo_url: self.demo_url.map(str::to_string),
            github_url: self.github_url.map(str::to_string),
            featured: self.featured,
            created_at: date,
            updated_at: date,
        }
    }
}

fn seed_date((year, month, day): (i32, u32, u32)) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .expect("valid seed date")
}

/// Fixed data set the store starts with. Order matters: listings surface
/// records in insertion order.
pub fn seed_projects() -> Vec<Project> {
    let seeds = vec![
        Seed {
            title: "E-Commerce Platform",
            description: "Full-stack e-commerce platform with payment integration, admin dashboard, and real-time inventory management.",
            category: ProjectCategory::WebDev,
            status: ProjectStatus::Completed,
            technologies: &["React", "Next.js", "TypeScript", "Node.js", "PostgreSQL", "Stripe"],
            image_seed: "ecommerce",
            demo_url: Some("https://demo.example.com"),
            github_url: Some("https://github.com/example/ecommerce"),
            featured: true,
            date: (2024, 1, 15),
        },
        Seed {
            title: "Social Media Dashboard",
            description: "Analytics dashboard for social media management with real-time metrics, scheduling, and multi-platform support.",
            category: ProjectCategory::WebDev,
            status: ProjectStatus::Completed,
            technologies: &["Vue.js", "TypeScript", "Express", "MongoDB", "Redis"],
            image_seed: "social",
            demo_url: None,
            github_url: None,
            featured: false,
            date: (2024, 2, 1),
        },
        Seed {
            title: "Learning Management System",
            description: "Complete LMS with course creation, student tracking, video streaming, and assessment tools.",
            category: ProjectCategory::WebDev,
            status: ProjectStatus::InProgress,
            technologies: &["Next.js", "TypeScript", "AWS", "PostgreSQL", "Stripe"],
            image_seed: "lms",
            demo_url: None,
            github_url: None,
            featured: true,
            date: (2024, 4, 5),
        },
        Seed {
            title: "Task Management App",
            description: "Cross-platform mobile app for task management with offline support, push notifications, and team collaboration.",
            category: ProjectCategory::AppDev,
            status: ProjectStatus::Completed,
            technologies: &["React Native", "TypeScript", "Firebase", "Redux"],
            image_seed: "taskapp",
            demo_url: None,
            github_url: None,
            featured: true,
            date: (2024, 2, 10),
        },
        Seed {
            title: "Budget Manager",
            description: "Personal finance app with expense tracking, budget planning, and financial insights.",
            category: ProjectCategory::AppDev,
            status: ProjectStatus::Completed,
            technologies: &["Swift", "SwiftUI", "CoreData", "Charts"],
            image_seed: "budget",
            demo_url: None,
            github_url: None,
            featured: false,
            date: (2024, 4, 20),
        },
        Seed {
            title: "Weather Forecast App",
            description: "Weather app with hourly forecasts, weather alerts, and location-based updates.",
            category: ProjectCategory::AppDev,
            status: ProjectStatus::Completed,
            technologies: &["Flutter", "Dart", "OpenWeather API", "Geolocator"],
            image_seed: "weather",
            demo_url: None,
            github_url: None,
            featured: false,
            date: (2024, 7, 15),
        },
        Seed {
            title: "Smart Home Dashboard",
            description: "IoT dashboard for monitoring and controlling smart home devices with real-time telemetry and automation rules.",
            category: ProjectCategory::Iot,
            status: ProjectStatus::InProgress,
            technologies: &["Node.js", "MQTT", "WebSocket", "React", "Arduino"],
            image_seed: "smarthome",
            demo_url: None,
            github_url: None,
            featured: true,
            date: (2024, 3, 5),
        },
        Seed {
            title: "Smart Agriculture System",
            description: "Automated irrigation and crop monitoring system with soil sensors and weather integration.",
            category: ProjectCategory::Iot,
            status: ProjectStatus::Completed,
            technologies: &["Arduino", "ESP32", "Node.js", "MongoDB", "Sensors"],
            image_seed: "agriculture",
            demo_url: None,
            github_url: None,
            featured: false,
            date: (2024, 5, 18),
        },
        Seed {
            title: "Energy Monitoring System",
            description: "Smart energy meter with consumption analytics, cost tracking, and efficiency recommendations.",
            category: ProjectCategory::Iot,
            status: ProjectStatus::Completed,
            technologies: &["Raspberry Pi", "Python", "MQTT", "React", "InfluxDB"],
            image_seed: "energy",
            demo_url: None,
            github_url: None,
            featured: false,
            date: (2024, 8, 14),
        },
        Seed {
            title: "Telegram Productivity Bot",
            description: "Telegram bot for task automation, reminders, and productivity tracking with natural language processing.",
            category: ProjectCategory::Automation,
            status: ProjectStatus::Completed,
            technologies: &["Python", "Telegram API", "PostgreSQL", "Redis"],
            image_seed: "telebot",
            demo_url: None,
            github_url: None,
            featured: true,
            date: (2024, 1, 20),
        },
        Seed {
            title: "Email Marketing Automation",
            description: "Automated email campaign system with segmentation, A/B testing, and analytics.",
            category: ProjectCategory::Automation,
            status: ProjectStatus::Completed,
            technologies: &["Python", "FastAPI", "PostgreSQL", "Celery", "SendGrid"],
            image_seed: "email",
            demo_url: None,
            github_url: None,
            featured: false,
            date: (2024, 4, 30),
        },
        Seed {
            title: "CI/CD Pipeline Bot",
            description: "GitHub bot for automated testing, deployment, and pull request management.",
            category: ProjectCategory::Automation,
            status: ProjectStatus::Completed,
            technologies: &["Node.js", "GitHub API", "Docker", "Kubernetes", "Slack"],
            image_seed: "cicd",
            demo_url: None,
            github_url: None,
            featured: false,
            date: (2024, 7, 25),
        },
    ];

    seeds.into_iter().map(Seed::build).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_covers_every_category() {
        let projects = seed_projects();
        for category in [
            ProjectCategory::WebDev,
            ProjectCategory::AppDev,
            ProjectCategory::Iot,
            ProjectCategory::Automation,
        ] {
            assert!(projects.iter().any(|p| p.category == category));
        }
    }

    #[test]
    fn seed_ids_are_unique_and_timestamps_consistent() {
        let projects = seed_projects();
        let mut ids: Vec<&str> = projects.iter().map(|p| p.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), projects.len());
        assert!(projects.iter().all(|p| p.updated_at >= p.created_at));
    }
}
