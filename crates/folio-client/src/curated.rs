//! Hand-authored detail content for selected projects.
//!
//! Records are attached through [`lookup`], which checks the project's id and
//! then its slug against a fixed key table. Titles are never inspected.

use folio_shared::models::Project;

/// Default "top five" shown for projects built on the web stack.
pub const TOP_STACK_WEB: [&str; 5] = ["React", "Node.js", "Express", "MongoDB", "Tailwind CSS"];

/// "Top five" for the Java projects.
pub const TOP_STACK_JAVA: [&str; 5] = ["Java", "JSP / Servlets", "JDBC", "MySQL", "Git"];

#[derive(Debug, PartialEq, Eq)]
pub struct CuratedProject {
    pub name: &'static str,
    pub tagline: &'static str,
    pub stack: &'static [&'static str],
    /// "Overview" paragraph.
    pub overview: &'static str,
    /// "What I Built" paragraph.
    pub built: &'static str,
    pub modules: &'static [&'static str],
    pub highlights: &'static [&'static str],
    pub top_stack: [&'static str; 5],
}

pub static VSMS: CuratedProject = CuratedProject {
    name: "Vehicle Service Management System",
    tagline: "A web-based platform that centralizes day-to-day operations for a vehicle \
              service centre.",
    stack: &[
        "MERN Stack",
        "Express JS",
        "Node JS",
        "MongoDB",
        "Tailwind CSS",
        "GitHub",
        "Git",
    ],
    overview: "Vehicle Service Management System is a web-based application designed for a \
               vehicle service centre, offering customer management, employee management, \
               appointment management, finance management, supplier management, stock \
               management, and payment management, leveraging the advantages of a modern \
               online system.",
    built: "Developed a comprehensive web-based management system for a car service center to \
            streamline operations including inventory, customer, employee, and finance \
            management. Implemented modules for appointment scheduling, payment tracking, and \
            internal notifications using RESTful APIs.",
    modules: &[
        "Customer Management",
        "Employee Management",
        "Appointment Scheduling",
        "Payment Management",
        "Finance/Revenue Tracking",
        "Supplier Management",
        "Stock/Inventory",
        "Notifications",
        "Reports & Insights",
    ],
    highlights: &[
        "Role-based access for admins, staff, and finance",
        "RESTful API with clear resource boundaries",
        "Validation & consistent error handling",
        "Responsive UI/UX with Tailwind CSS",
        "Scalable MongoDB models for bookings, invoices, stock",
    ],
    top_stack: TOP_STACK_WEB,
};

pub static IT_PORTAL: CuratedProject = CuratedProject {
    name: "IT Portal - Ministry of Agriculture",
    tagline: "A modern portal that automates meeting room bookings and IT service requests, \
              replacing manual workflows and improving operational efficiency across the \
              Ministry.",
    stack: &[
        "React.js",
        "Node.js (Express)",
        "MongoDB",
        "Tailwind CSS",
        "RESTful APIs",
        "Chrome DevTools",
        "GitHub",
        "Git",
    ],
    overview: "The portal streamlines internal operations: officers can check availability, \
               request rooms with required IT support, and receive confirmations. It replaces \
               manual, paper-based processes with auditable digital flows. Features include \
               automated notifications, user profiles, and a conference hall booking system \
               tailored to the Ministry’s operations.",
    built: "I led design, development, and testing using React, Express, and MongoDB. I ran \
            diagnostic tests for network connectivity, configured new hardware, and handled \
            system software updates. Weekly feedback and rigorous QA (with Chrome DevTools for \
            profiling and debugging) improved performance and reduced support response times \
            during critical meetings.",
    modules: &[
        "Conference Hall / Meeting Room Booking",
        "IT Service Requests & Automated Notifications",
        "User Profiles & Role-Based Access",
        "Equipment & Support Requirements (projectors, laptops)",
        "Admin Scheduling & Approvals",
        "Exportable Confirmations (PDF / Print)",
        "Dashboard & Usage Insights",
        "Request History & Audit Logs",
        "Inventory Hooks for Room Equipment",
    ],
    highlights: &[
        "Manual processes → trackable, auditable digital workflows",
        "Automated notifications reduce ad-hoc calls and delays",
        "Performance fixes via structured debugging & profiling",
        "Weekly review cycles improved UX and reliability",
        "Noticeable reduction in incident response time",
    ],
    top_stack: TOP_STACK_WEB,
};

pub static TRAIN: CuratedProject = CuratedProject {
    name: "Train Ticket Reservation System",
    tagline: "A Java-based ticketing platform to search routes, manage trains & stations, and \
              reserve seats with validation and secure data handling.",
    stack: &[
        "Java",
        "JSP / Servlets",
        "MVC",
        "JDBC",
        "SQL (MySQL)",
        "HTML/CSS",
        "GitHub",
        "Git",
    ],
    overview: "Train Ticket Reservation System is a web application built with Java web \
               technologies. The system covers core site features such as authentication, \
               search, and robust form validations. Domain features include managing stations, \
               destinations, and trains, along with a booking workflow and administrative \
               controls.",
    built: "Engineered using OOP and MVC principles to keep controllers, services, and DAOs \
            cleanly separated. SQL/JDBC is used for persistence and transaction safety. I also \
            iterated with a desktop-style prototype while finalizing the web flows to validate \
            MVC and design patterns.",
    modules: &[
        "User Authentication & Profiles",
        "Station / Destination Management",
        "Train Management (CRUD)",
        "Trip Schedules & Seat Maps",
        "Search & Availability",
        "Booking & Cancellations",
        "Payments / Receipts (extensible)",
        "Admin Dashboard & Reports",
        "Validation & Error Handling",
    ],
    highlights: &[
        "Strict MVC layering (Controllers / Services / DAO)",
        "Clean OOP modeling for Trains, Trips, Tickets, Users",
        "JDBC with prepared statements & transactions",
        "Form validation and user-friendly error states",
        "Search performance tuned with indexed queries",
    ],
    top_stack: TOP_STACK_JAVA,
};

/// Project ids and slugs with curated content.
static TABLE: &[(&str, &CuratedProject)] = &[
    ("vsms", &VSMS),
    ("vehicle-service-management-system", &VSMS),
    ("moa-portal", &IT_PORTAL),
    ("it-portal-ministry-of-agriculture", &IT_PORTAL),
    ("train-reservation", &TRAIN),
    ("train-reservation-system", &TRAIN),
];

pub fn by_key(key: &str) -> Option<&'static CuratedProject> {
    TABLE
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, record)| *record)
}

/// Curated record for `project`, by id first and slug second.
pub fn lookup(project: &Project) -> Option<&'static CuratedProject> {
    by_key(&project.id).or_else(|| project.slug.as_deref().and_then(by_key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults;

    fn project(id: &str, slug: Option<&str>, title: &str) -> Project {
        Project {
            id: id.into(),
            slug: slug.map(Into::into),
            title: title.into(),
            ..Default::default()
        }
    }

    #[test]
    fn matches_by_id() {
        assert_eq!(lookup(&project("vsms", None, "")), Some(&VSMS));
        assert_eq!(lookup(&project("train-reservation", None, "")), Some(&TRAIN));
    }

    #[test]
    fn matches_by_slug_when_id_is_opaque() {
        let p = project(
            "65a1f0c2e4b0a1b2c3d4e5f6",
            Some("it-portal-ministry-of-agriculture"),
            "",
        );
        assert_eq!(lookup(&p), Some(&IT_PORTAL));
    }

    #[test]
    fn title_alone_never_matches() {
        let p = project("x1", None, "Train Reservation system");
        assert_eq!(lookup(&p), None);
    }

    #[test]
    fn placeholder_projects_map_to_expected_records() {
        let curated: Vec<_> = defaults::projects()
            .iter()
            .map(|p| lookup(p).map(|c| c.name))
            .collect();
        assert_eq!(
            curated,
            vec![
                Some(VSMS.name),
                Some(IT_PORTAL.name),
                None,
                Some(TRAIN.name),
                None,
                None,
            ]
        );
    }

    #[test]
    fn only_train_uses_java_stack() {
        assert_eq!(VSMS.top_stack, TOP_STACK_WEB);
        assert_eq!(IT_PORTAL.top_stack, TOP_STACK_WEB);
        assert_eq!(TRAIN.top_stack, TOP_STACK_JAVA);
    }
}
