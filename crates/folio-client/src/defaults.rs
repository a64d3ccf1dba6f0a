//! Hand-authored placeholder content shown when the API has nothing to offer.

use folio_shared::models::{Education, Experience, Profile, Project, SocialLink};

/// Shown on a project page that has no long description of its own.
pub const PLACEHOLDER_LONG_DESCRIPTION: &str = "This project page can include goals, features, \
challenges, and what you learned. Add more fields in the backend if you want.";

const DEFAULT_CV_NAME: &str = "Kavishka-De-Silva-CV.pdf";

pub fn profile() -> Profile {
    Profile {
        id: String::new(),
        name: "Kavishka De Silva".into(),
        role: "Undergraduated SLIIT Student".into(),
        about: "I am a passionate IT undergraduate with a strong background in programming and \
                software engineering. I have hands-on experience in web development, databases, \
                and software projects, and I’m eager to apply my skills to contribute to \
                innovative solutions."
            .into(),
        socials: vec![
            social("facebook", "https://web.facebook.com/profile.php?id=100075079162686"),
            social("twitter", "#"),
            social("instagram", "#"),
            social("linkedin", "https://www.linkedin.com/in/kavishka-ashan-de-silva/"),
        ],
        cv: format!("/cv/{DEFAULT_CV_NAME}"),
        cv_name: Some(DEFAULT_CV_NAME.into()),
    }
}

/// Fill any blank field of `live` from `default`, one field at a time.
pub fn fill_profile(live: &Profile, default: &Profile) -> Profile {
    fn pick(live: &str, default: &str) -> String {
        let chosen = if live.is_empty() { default } else { live };
        chosen.to_string()
    }

    Profile {
        id: live.id.clone(),
        name: pick(&live.name, &default.name),
        role: pick(&live.role, &default.role),
        about: pick(&live.about, &default.about),
        socials: if live.socials.is_empty() {
            default.socials.clone()
        } else {
            live.socials.clone()
        },
        cv: pick(&live.cv, &default.cv),
        cv_name: live.cv_name.clone().or_else(|| default.cv_name.clone()),
    }
}

pub fn projects() -> Vec<Project> {
    const GITHUB: &str = "https://github.com/kavishka-ashan";

    let project = |id: &str, slug: &str, title: &str, description: &str, image: &str| Project {
        id: id.into(),
        slug: Some(slug.into()),
        title: title.into(),
        description: description.into(),
        image: image.into(),
        github: Some(GITHUB.into()),
        ..Default::default()
    };

    vec![
        project(
            "vsms",
            "vehicle-service-management-system",
            "Vehicle Service Management System",
            "All-in-one web system for a vehicle service centre.",
            "/car.png",
        ),
        project(
            "moa-portal",
            "it-portal-ministry-of-agriculture",
            "IT Portal - Ministry of Agriculture",
            "Conference hall booking & IT requests automation.",
            "/IT.png",
        ),
        project(
            "recruitment",
            "recruitment-company-system",
            "Recruitment Company System",
            "Job postings, candidate pipeline, and HR tools.",
            "/company.png",
        ),
        project(
            "train-reservation",
            "train-reservation-system",
            "Train Reservation system",
            "Seat booking with schedules & user profiles.",
            "/train.png",
        ),
        Project {
            tech: strings(&["React", "Node", "MongoDB"]),
            features: strings(&["Operator portal", "Seat selection", "Reports"]),
            long_description: Some(
                "Designed for bus operators with route management, schedules, seat selection, \
                 payment flows, and reporting."
                    .into(),
            ),
            ..project(
                "bus-reservation",
                "bus-reservation-system",
                "Bus reservation system",
                "Routes, seats, and fares for buses.",
                "/bus.png",
            )
        },
        Project {
            tech: strings(&["Hardware", "DevTools"]),
            features: strings(&["Multi-monitor", "Peripherals", "Optimized workflow"]),
            long_description: Some(
                "A showcase of my desk setup and the developer tools I rely on daily for \
                 productivity, testing, and design."
                    .into(),
            ),
            ..project(
                "workstation",
                "workstation-setup",
                "Workstation",
                "My productive development setup.",
                "/train.png",
            )
        },
    ]
}

pub fn education() -> Vec<Education> {
    vec![
        Education {
            id: String::new(),
            school: "SLIIT".into(),
            degree: "BSc (Hons) in IT".into(),
            period: "2023 — Present".into(),
            location: "Malabe, Sri Lanka".into(),
            details: "Specialising in Software Engineering; algorithms, databases, and MERN stack."
                .into(),
        },
        Education {
            id: String::new(),
            school: "ABC College".into(),
            degree: "G.C.E. A/L (Physical Science)".into(),
            period: "2020 — 2022".into(),
            location: "Colombo".into(),
            details: "Mathematics, Physics, Chemistry.".into(),
        },
    ]
}

pub fn experience() -> Vec<Experience> {
    vec![
        Experience {
            id: String::new(),
            company: "Freelance".into(),
            role: "Frontend Developer (MERN)".into(),
            period: "2024 — Present".into(),
            location: "Remote".into(),
            details: "Built responsive React/Tailwind UIs, integrated REST APIs, and deployed to \
                      cloud."
                .into(),
        },
        Experience {
            id: String::new(),
            company: "Tech Studio".into(),
            role: "Intern Software Engineer".into(),
            period: "2023 — 2024".into(),
            location: "Colombo".into(),
            details: "Implemented dashboards, wrote Express endpoints, unit tests, and \
                      documentation."
                .into(),
        },
    ]
}

fn social(icon: &str, link: &str) -> SocialLink {
    SocialLink {
        icon: icon.into(),
        link: link.into(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
