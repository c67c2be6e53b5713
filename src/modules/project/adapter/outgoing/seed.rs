//! Portfolio projects served by the in-memory catalog.

use crate::modules::project::domain::{Project, ProjectCategory, ProjectStatus};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

pub fn portfolio_projects() -> Vec<Project> {
    vec![
        Project {
            id: "1".to_string(),
            title: "E-Commerce Microservices Platform".to_string(),
            description: "Enterprise-grade e-commerce platform built with Spring Boot microservices, featuring user management, product catalog, order processing, and payment integration.".to_string(),
            detailed_description: Some("A comprehensive e-commerce solution built using microservices architecture. The platform includes separate services for user management, product catalog, order processing, payment handling, and notification systems. Built with Spring Boot, Spring Security, and deployed on AWS with Docker containers.".to_string()),
            technologies: strings(&["Spring Boot", "React", "PostgreSQL", "Docker", "AWS", "Redis", "Spring Security", "JWT"]),
            category: ProjectCategory::Enterprise,
            status: ProjectStatus::Completed,
            image_url: None,
            demo_url: Some("https://demo-ecommerce.com".to_string()),
            github_url: Some("https://github.com/username/ecommerce-platform".to_string()),
            year: Some(2024),
            client: Some("TechCorp Inc.".to_string()),
            duration: Some("6 months".to_string()),
            team_size: Some(5),
            featured: true,
        },
        Project {
            id: "2".to_string(),
            title: "Real-time Chat Application".to_string(),
            description: "Scalable chat application with WebSocket support, real-time messaging, file sharing, and user presence indicators built with Spring WebFlux.".to_string(),
            detailed_description: Some("A modern real-time chat application supporting multiple chat rooms, file sharing, emoji reactions, and user presence indicators. Built with Spring WebFlux for reactive programming and MongoDB for data storage.".to_string()),
            technologies: strings(&["Spring WebFlux", "WebSocket", "MongoDB", "React", "TypeScript", "Socket.io"]),
            category: ProjectCategory::Web,
            status: ProjectStatus::Completed,
            image_url: None,
            demo_url: Some("https://chat-demo.com".to_string()),
            github_url: Some("https://github.com/username/chat-app".to_string()),
            year: Some(2023),
            client: None,
            duration: Some("3 months".to_string()),
            team_size: Some(3),
            featured: true,
        },
        Project {
            id: "3".to_string(),
            title: "Financial Analytics Dashboard".to_string(),
            description: "Comprehensive financial analytics platform with data visualization, reporting, and real-time market data integration using Spring Boot and React.".to_string(),
            detailed_description: Some("A sophisticated financial analytics platform that provides real-time market data analysis, portfolio tracking, and comprehensive reporting features. Integrates with multiple financial APIs and provides advanced charting capabilities.".to_string()),
            technologies: strings(&["Spring Boot", "React", "Chart.js", "MySQL", "Apache Kafka", "Spring Data JPA"]),
            category: ProjectCategory::Api,
            status: ProjectStatus::Completed,
            image_url: None,
            demo_url: Some("https://finance-dashboard.com".to_string()),
            github_url: Some("https://github.com/username/finance-dashboard".to_string()),
            year: Some(2023),
            client: Some("FinanceCorp".to_string()),
            duration: Some("4 months".to_string()),
            team_size: Some(4),
            featured: true,
        },
        Project {
            id: "4".to_string(),
            title: "Task Management API".to_string(),
            description: "RESTful API for task management with user authentication, project organization, and team collaboration features.".to_string(),
            detailed_description: Some("A comprehensive task management API built with Spring Boot that supports user authentication, project management, task assignment, and team collaboration. Features include role-based access control, file attachments, and real-time notifications.".to_string()),
            technologies: strings(&["Spring Boot", "Spring Security", "PostgreSQL", "JWT", "Swagger", "JUnit"]),
            category: ProjectCategory::Api,
            status: ProjectStatus::Completed,
            image_url: None,
            demo_url: None,
            github_url: Some("https://github.com/username/task-api".to_string()),
            year: Some(2022),
            client: None,
            duration: Some("2 months".to_string()),
            team_size: Some(2),
            featured: false,
        },
        Project {
            id: "5".to_string(),
            title: "Inventory Management System".to_string(),
            description: "Enterprise inventory management system with real-time tracking, automated reordering, and comprehensive reporting.".to_string(),
            detailed_description: Some("A full-featured inventory management system designed for enterprise use. Includes real-time inventory tracking, automated reorder points, supplier management, and comprehensive reporting with data export capabilities.".to_string()),
            technologies: strings(&["Spring Boot", "Angular", "MySQL", "Spring Data JPA", "Apache POI", "Quartz Scheduler"]),
            category: ProjectCategory::Enterprise,
            status: ProjectStatus::Completed,
            image_url: None,
            demo_url: Some("https://inventory-demo.com".to_string()),
            github_url: Some("https://github.com/username/inventory-system".to_string()),
            year: Some(2022),
            client: Some("RetailCorp".to_string()),
            duration: Some("8 months".to_string()),
            team_size: Some(6),
            featured: false,
        },
        Project {
            id: "6".to_string(),
            title: "Mobile Banking App Backend".to_string(),
            description: "Secure backend API for mobile banking application with transaction processing, account management, and fraud detection.".to_string(),
            detailed_description: Some("A highly secure backend system for mobile banking applications. Features include encrypted transaction processing, multi-factor authentication, fraud detection algorithms, and compliance with banking regulations.".to_string()),
            technologies: strings(&["Spring Boot", "Spring Security", "PostgreSQL", "Redis", "Apache Kafka", "Docker"]),
            category: ProjectCategory::Api,
            status: ProjectStatus::InProgress,
            image_url: None,
            demo_url: None,
            github_url: Some("https://github.com/username/banking-backend".to_string()),
            year: Some(2024),
            client: Some("BankCorp".to_string()),
            duration: Some("12 months".to_string()),
            team_size: Some(8),
            featured: false,
        },
    ]
}
