//! Employment history served by the in-memory catalog.

use chrono::NaiveDate;

use crate::modules::experience::domain::Experience;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

pub fn career_history() -> Vec<Experience> {
    vec![
        Experience {
            id: "1".to_string(),
            position: "Senior Full-Stack Java Developer".to_string(),
            company: "TechCorp Solutions".to_string(),
            location: Some("San Francisco, CA".to_string()),
            start_date: ymd(2022, 1, 15),
            end_date: None,
            is_current: true,
            description: "Leading development of enterprise-grade applications using Java, Spring Boot, and modern web technologies. Responsible for architecting scalable microservices and mentoring junior developers.".to_string(),
            achievements: Some(strings(&[
                "Led development of a microservices-based e-commerce platform serving 100K+ users",
                "Improved application performance by 40% through code optimization and caching strategies",
                "Mentored 3 junior developers and established best practices for code quality",
                "Implemented CI/CD pipelines reducing deployment time by 60%",
                "Designed and implemented security measures achieving SOC 2 compliance",
            ])),
            technologies: Some(strings(&["Java 17+", "Spring Boot", "Spring Security", "React", "PostgreSQL", "Docker", "AWS", "Kubernetes"])),
        },
        Experience {
            id: "2".to_string(),
            position: "Full-Stack Java Developer".to_string(),
            company: "InnovateTech Inc.".to_string(),
            location: Some("Austin, TX".to_string()),
            start_date: ymd(2020, 3, 1),
            end_date: Some(ymd(2021, 12, 31)),
            is_current: false,
            description: "Developed and maintained web applications using Java Spring framework and modern frontend technologies. Collaborated with cross-functional teams to deliver high-quality software solutions.".to_string(),
            achievements: Some(strings(&[
                "Built RESTful APIs handling 1M+ requests per day",
                "Developed responsive web applications using React and TypeScript",
                "Implemented automated testing increasing code coverage to 85%",
                "Optimized database queries reducing response time by 30%",
                "Collaborated with DevOps team to implement containerization",
            ])),
            technologies: Some(strings(&["Java 11", "Spring Boot", "Spring MVC", "React", "TypeScript", "MySQL", "Docker", "Jenkins"])),
        },
        Experience {
            id: "3".to_string(),
            position: "Java Developer".to_string(),
            company: "StartupXYZ".to_string(),
            location: Some("Seattle, WA".to_string()),
            start_date: ymd(2019, 6, 1),
            end_date: Some(ymd(2020, 2, 28)),
            is_current: false,
            description: "Developed backend services and APIs for a fast-growing startup. Worked closely with product managers and designers to implement new features and improve existing functionality.".to_string(),
            achievements: Some(strings(&[
                "Developed core backend services from scratch using Spring Boot",
                "Implemented real-time features using WebSocket technology",
                "Built data processing pipelines handling large datasets",
                "Participated in agile development processes and sprint planning",
                "Contributed to open-source projects and technical documentation",
            ])),
            technologies: Some(strings(&["Java 8", "Spring Boot", "Spring Data JPA", "PostgreSQL", "Redis", "Git", "Maven"])),
        },
        Experience {
            id: "4".to_string(),
            position: "Junior Java Developer".to_string(),
            company: "Enterprise Solutions Ltd.".to_string(),
            location: Some("Chicago, IL".to_string()),
            start_date: ymd(2018, 8, 1),
            end_date: Some(ymd(2019, 5, 31)),
            is_current: false,
            description: "Started career as a junior developer working on enterprise applications. Gained experience in Java development, database design, and software engineering best practices.".to_string(),
            achievements: Some(strings(&[
                "Developed and maintained legacy Java applications",
                "Learned enterprise development patterns and practices",
                "Participated in code reviews and team collaboration",
                "Contributed to bug fixes and feature enhancements",
                "Completed training in Spring framework and modern Java features",
            ])),
            technologies: Some(strings(&["Java 8", "Spring Framework", "Oracle Database", "JSP", "Servlets", "Maven", "SVN"])),
        },
    ]
}
