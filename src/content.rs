//! The content registry: every piece of copy the site renders.
//!
//! All content is compiled in. [`registry`] hands out a single
//! `&'static Registry` that lives for the whole process and is never
//! mutated, so pages can borrow from it freely from any thread (the
//! generator renders pages in parallel).
//!
//! Besides the shared tables (company profile, navigation, products,
//! initiatives), the registry also owns the small card blocks that belong
//! to a single page: values, benefits, process steps, impact stats, FAQs.
//! They all share the [`LabeledCard`] shape and render through the same
//! staggered card grid.
//!
//! [`Registry::validate`] checks the invariants the tables must hold. A
//! failure is a build error: `build` and `check` refuse to continue.

use crate::types::Route;
use serde::Serialize;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContentError {
    #[error("duplicate product id {0}")]
    DuplicateProductId(u32),
    #[error("navigation lists {0} more than once")]
    DuplicateRoute(Route),
    #[error("navigation has no entry for {0}")]
    MissingRoute(Route),
    #[error("{0} has an empty name")]
    EmptyName(&'static str),
}

#[derive(Debug, Clone, Serialize)]
pub struct CompanyProfile {
    pub name: &'static str,
    pub tagline: &'static str,
    pub mission: &'static str,
    pub vision: &'static str,
    pub address: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
}

impl CompanyProfile {
    /// Initials shown in the logo badge ("ST").
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .take(2)
            .filter_map(|w| w.chars().next())
            .collect()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NavigationEntry {
    pub label: &'static str,
    pub route: Route,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductRecord {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub ideal_for: &'static [&'static str],
    /// Opaque URL resolved by the asset host.
    pub image: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct InitiativeRecord {
    pub name: &'static str,
    pub description: &'static str,
    /// Emphasised initiatives span two columns and carry the featured note.
    pub emphasized: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServiceRecord {
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SdgGoal {
    pub number: u8,
    pub title: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Supporter {
    pub name: &'static str,
    pub logo: &'static str,
}

/// Title + description card, with an optional badge (icon, step number or
/// statistic). Used for every small card grid on the site.
#[derive(Debug, Clone, Serialize)]
pub struct LabeledCard {
    pub title: &'static str,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<&'static str>,
}

impl LabeledCard {
    /// Badge text, falling back to the title's first letter.
    pub fn badge_or_initial(&self) -> String {
        match self.badge {
            Some(b) => b.to_string(),
            None => self.title.chars().next().map(String::from).unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

/// Long-form service description on the Services page.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceDetail {
    pub title: &'static str,
    /// Markdown.
    pub body: &'static str,
    pub points: &'static [&'static str],
    pub icon: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct BusinessHours {
    pub days: &'static str,
    pub hours: &'static str,
}

/// Heading and lead paragraph at the top of a page.
#[derive(Debug, Clone, Serialize)]
pub struct Hero {
    pub route: Route,
    pub title: &'static str,
    pub lead: &'static str,
}

/// Closing call-to-action band.
#[derive(Debug, Clone, Serialize)]
pub struct CallToAction {
    pub route: Route,
    pub title: &'static str,
    pub body: &'static str,
    pub button: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Registry {
    pub company: CompanyProfile,
    pub navigation: &'static [NavigationEntry],
    pub heroes: &'static [Hero],
    pub calls_to_action: &'static [CallToAction],
    pub sdg_goals: &'static [SdgGoal],
    pub products: &'static [ProductRecord],
    pub services: &'static [ServiceRecord],
    pub service_details: &'static [ServiceDetail],
    pub service_process: &'static [LabeledCard],
    pub initiatives: &'static [InitiativeRecord],
    pub featured_note: &'static str,
    /// Long-form description of the emphasised initiative, markdown.
    pub flagship_story: &'static str,
    pub program_highlights: &'static [LabeledCard],
    pub approaches: &'static [LabeledCard],
    pub impact: &'static [LabeledCard],
    pub supporters: &'static [Supporter],
    pub customers: &'static [LabeledCard],
    pub values: &'static [LabeledCard],
    pub benefits: &'static [LabeledCard],
    pub faqs: &'static [Faq],
    pub business_hours: &'static [BusinessHours],
    /// About page story, markdown.
    pub story: &'static str,
    /// Home page "What We Do" blurb.
    pub what_we_do: &'static str,
    /// Footer blurb under the company name.
    pub footer_blurb: &'static str,
}

impl Registry {
    pub fn hero(&self, route: Route) -> Option<&Hero> {
        self.heroes.iter().find(|h| h.route == route)
    }

    pub fn call_to_action(&self, route: Route) -> Option<&CallToAction> {
        self.calls_to_action.iter().find(|c| c.route == route)
    }

    pub fn product(&self, id: u32) -> Option<&ProductRecord> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn nav_label(&self, route: Route) -> Option<&'static str> {
        self.navigation
            .iter()
            .find(|n| n.route == route)
            .map(|n| n.label)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        validate_products(self.products)?;
        validate_navigation(self.navigation)?;
        if self.company.name.trim().is_empty() {
            return Err(ContentError::EmptyName("company"));
        }
        if self.initiatives.iter().any(|i| i.name.trim().is_empty()) {
            return Err(ContentError::EmptyName("initiative"));
        }
        if self.services.iter().any(|s| s.name.trim().is_empty()) {
            return Err(ContentError::EmptyName("service"));
        }
        Ok(())
    }
}

fn validate_products(products: &[ProductRecord]) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for product in products {
        if product.name.trim().is_empty() {
            return Err(ContentError::EmptyName("product"));
        }
        if !seen.insert(product.id) {
            return Err(ContentError::DuplicateProductId(product.id));
        }
    }
    Ok(())
}

fn validate_navigation(entries: &[NavigationEntry]) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for entry in entries {
        if entry.label.trim().is_empty() {
            return Err(ContentError::EmptyName("navigation entry"));
        }
        if !seen.insert(entry.route) {
            return Err(ContentError::DuplicateRoute(entry.route));
        }
    }
    match Route::ALL.into_iter().find(|r| !seen.contains(r)) {
        Some(missing) => Err(ContentError::MissingRoute(missing)),
        None => Ok(()),
    }
}

/// The process-wide content registry.
pub fn registry() -> &'static Registry {
    &REGISTRY
}

static REGISTRY: Registry = Registry {
    company: CompanyProfile {
        name: "Sackhe Technologies Pvt Ltd",
        tagline: "The path to zero waste",
        mission: "To revolutionize menstrual and solid waste management through innovative, eco-friendly incineration technology that ensures community health and environmental protection.",
        vision: "To become a global leader in sustainable menstrual and solid waste management, setting new standards for environmental responsibility and public health.",
        address: "Hyderabad, Telangana, India",
        phone: "+91 9876543210",
        email: "info@sackhetechnologies.com",
    },
    navigation: &[
        NavigationEntry { label: "Home", route: Route::Home },
        NavigationEntry { label: "About", route: Route::About },
        NavigationEntry { label: "Products", route: Route::Products },
        NavigationEntry { label: "Services", route: Route::Services },
        NavigationEntry { label: "Initiatives", route: Route::Initiatives },
        NavigationEntry { label: "Contact", route: Route::Contact },
    ],
    heroes: &[
        Hero {
            route: Route::Home,
            title: "Transforming Waste, Protecting Futures",
            lead: "Innovative and Sustainable Solutions for Menstrual and Solid Waste Management",
        },
        Hero {
            route: Route::About,
            title: "About Us",
            lead: "Leading the revolution in sustainable waste management through innovation and commitment to environmental protection.",
        },
        Hero {
            route: Route::Products,
            title: "Our Products",
            lead: "Innovative waste management solutions designed for sustainability, efficiency, and environmental protection.",
        },
        Hero {
            route: Route::Services,
            title: "Our Services",
            lead: "Comprehensive support services to ensure optimal performance and longevity of your waste management systems.",
        },
        Hero {
            route: Route::Initiatives,
            title: "Our Initiatives",
            lead: "Empowering communities through education, awareness, and sustainable solutions for women's health and empowerment.",
        },
        Hero {
            route: Route::Contact,
            title: "Contact Us",
            lead: "Ready to transform your waste management? Get in touch with our team to discuss your specific requirements and discover how we can help.",
        },
    ],
    calls_to_action: &[
        CallToAction {
            route: Route::Home,
            title: "Ready to Transform Your Waste Management?",
            body: "Join us in creating a sustainable future. Contact our team to learn how our solutions can benefit your organization.",
            button: "Get Started Today",
        },
        CallToAction {
            route: Route::Products,
            title: "Ready to Implement Our Solutions?",
            body: "Contact our team to discuss your specific requirements and get a customized solution for your organization.",
            button: "Request a Consultation",
        },
        CallToAction {
            route: Route::Services,
            title: "Need Expert Service Support?",
            body: "Our service team is ready to help you maximize the value of your waste management investments.",
            button: "Contact Our Service Team",
        },
        CallToAction {
            route: Route::Initiatives,
            title: "Join Our Mission",
            body: "Partner with us to bring menstrual health education and sustainable waste solutions to more communities.",
            button: "Get Involved",
        },
    ],
    sdg_goals: &[
        SdgGoal { number: 3, title: "Good Health and Well-being" },
        SdgGoal { number: 7, title: "Affordable and Clean Energy" },
        SdgGoal { number: 9, title: "Industry, Innovation and Infrastructure" },
        SdgGoal { number: 11, title: "Sustainable Cities and Communities" },
        SdgGoal { number: 12, title: "Responsible Consumption and Production" },
        SdgGoal { number: 13, title: "Climate Action" },
        SdgGoal { number: 15, title: "Life on Land" },
    ],
    products: &[
        ProductRecord {
            id: 1,
            name: "Menstrual Incinerator",
            description: "Sustainable sanitary waste disposal solution designed for safe and hygienic management of menstrual waste.",
            features: &[
                "Eco-friendly design with minimal environmental impact",
                "Completely odorless operation",
                "High-temperature combustion for complete waste elimination",
                "User-friendly interface with safety features",
                "Compact design suitable for various spaces",
            ],
            ideal_for: &["Schools", "Colleges", "Offices", "Public Buildings", "Healthcare Facilities"],
            image: "https://images.pexels.com/photos/3735782/pexels-photo-3735782.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
        },
        ProductRecord {
            id: 2,
            name: "Solid Waste Management System",
            description: "Comprehensive end-to-end solution for organized waste handling and processing.",
            features: &[
                "Complete waste segregation system",
                "Scalable design for various capacities",
                "Automated processing capabilities",
                "Real-time monitoring and reporting",
                "Environmentally compliant operations",
            ],
            ideal_for: &[
                "Municipalities",
                "Apartment Complexes",
                "Industrial Areas",
                "Commercial Spaces",
                "Educational Institutions",
            ],
            image: "https://images.pexels.com/photos/3852577/pexels-photo-3852577.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
        },
    ],
    services: &[
        ServiceRecord {
            name: "Technical Support",
            description: "Comprehensive hardware and software troubleshooting services to ensure optimal system performance.",
            icon: "🔧",
        },
        ServiceRecord {
            name: "Maintenance Services",
            description: "Regular inspections, preventive maintenance, and repair services to extend equipment lifecycle.",
            icon: "🛠️",
        },
        ServiceRecord {
            name: "Waste Management Advisory",
            description: "Strategic planning and guidance for implementing effective waste management systems.",
            icon: "💡",
        },
        ServiceRecord {
            name: "Training Programs",
            description: "Educational sessions and awareness programs for proper waste management practices.",
            icon: "🎓",
        },
    ],
    service_details: &[
        ServiceDetail {
            title: "24/7 Technical Support",
            body: "Our dedicated technical team provides **round-the-clock support** to ensure your systems operate at peak efficiency. Whether you're facing hardware issues, software glitches, or need guidance on system optimization, we're here to help.",
            points: &[
                "Remote diagnostics and troubleshooting",
                "On-site technical assistance",
                "Emergency response services",
            ],
            icon: "🔧",
        },
        ServiceDetail {
            title: "Comprehensive Maintenance",
            body: "Preventive maintenance is key to extending equipment lifespan and ensuring optimal performance. Our maintenance programs are *tailored* to your specific systems and operational requirements.",
            points: &[
                "Scheduled preventive maintenance",
                "Component replacement and upgrades",
                "Performance optimization",
            ],
            icon: "🛠️",
        },
        ServiceDetail {
            title: "Strategic Advisory",
            body: "Our experts provide strategic guidance to help you implement the most effective waste management solutions for your organization. From initial planning to full-scale implementation, we're your trusted partners.",
            points: &[
                "Waste management assessments",
                "Implementation planning",
                "Compliance guidance",
            ],
            icon: "💡",
        },
    ],
    service_process: &[
        LabeledCard {
            title: "Assessment",
            description: "Comprehensive evaluation of your current waste management needs and challenges.",
            badge: Some("01"),
        },
        LabeledCard {
            title: "Planning",
            description: "Development of customized service plans tailored to your specific requirements.",
            badge: Some("02"),
        },
        LabeledCard {
            title: "Implementation",
            description: "Professional deployment of services with minimal disruption to your operations.",
            badge: Some("03"),
        },
        LabeledCard {
            title: "Monitoring",
            description: "Ongoing monitoring and optimization to ensure continued excellence.",
            badge: Some("04"),
        },
    ],
    initiatives: &[
        InitiativeRecord {
            name: "EmpowerHer",
            description: "Empowering women through sustainable menstrual health solutions and awareness programs.",
            emphasized: false,
        },
        InitiativeRecord {
            name: "Her Dreams",
            description: "Supporting girl education by removing barriers related to menstrual health and hygiene.",
            emphasized: false,
        },
        InitiativeRecord {
            name: "Cycle of Change",
            description: "Comprehensive menstruation education program promoting awareness, breaking taboos, and ensuring access to proper menstrual hygiene facilities.",
            emphasized: true,
        },
        InitiativeRecord {
            name: "SelfShine",
            description: "Promoting self-love, confidence, and mental health awareness among young women.",
            emphasized: false,
        },
        InitiativeRecord {
            name: "GirlUp",
            description: "Building collective action and community upliftment through collaborative women empowerment initiatives.",
            emphasized: false,
        },
    ],
    featured_note: "Our flagship program focused on breaking menstruation taboos and ensuring every girl has access to proper menstrual health education and facilities.",
    flagship_story: "Our flagship initiative, **Cycle of Change**, is at the heart of our mission to revolutionize menstrual health awareness and accessibility. This comprehensive program addresses the critical need for education, infrastructure, and cultural change around menstruation.

Through partnerships with schools, colleges, and community organizations, we provide:

- Comprehensive menstrual health education programs
- Installation of menstrual waste incinerators in institutions
- Community awareness campaigns to break taboos
- Training programs for educators and healthcare workers
",
    program_highlights: &[
        LabeledCard {
            title: "Education First",
            description: "Breaking myths and providing accurate information about menstrual health and hygiene.",
            badge: None,
        },
        LabeledCard {
            title: "Infrastructure Support",
            description: "Installing eco-friendly menstrual waste disposal systems in schools and colleges.",
            badge: None,
        },
        LabeledCard {
            title: "Community Engagement",
            description: "Working with local communities to create supportive environments for menstrual health.",
            badge: None,
        },
    ],
    approaches: &[
        LabeledCard {
            title: "Breaking Barriers",
            description: "Addressing cultural taboos and social stigma through education and awareness campaigns.",
            badge: Some("🚧"),
        },
        LabeledCard {
            title: "Providing Access",
            description: "Ensuring access to safe, hygienic menstrual waste disposal facilities in educational institutions.",
            badge: Some("🎯"),
        },
        LabeledCard {
            title: "Building Confidence",
            description: "Empowering women and girls with knowledge and resources to manage their menstrual health with dignity.",
            badge: Some("💪"),
        },
    ],
    impact: &[
        LabeledCard { title: "Women Empowered", description: "500+", badge: Some("👩") },
        LabeledCard { title: "Educational Institutions", description: "50+", badge: Some("🏫") },
        LabeledCard { title: "Communities Reached", description: "25+", badge: Some("🌍") },
        LabeledCard { title: "Lives Impacted", description: "1000+", badge: Some("❤️") },
    ],
    supporters: &[
        Supporter { name: "KG Reddy College", logo: "KGR" },
        Supporter { name: "CIST", logo: "CIST" },
        Supporter { name: "KASE", logo: "KASE" },
    ],
    customers: &[
        LabeledCard {
            title: "Local Communities",
            description: "Serving grassroots communities with accessible and sustainable waste management solutions.",
            badge: None,
        },
        LabeledCard {
            title: "Municipal Authorities",
            description: "Partnering with local governments to implement city-wide waste management systems.",
            badge: None,
        },
        LabeledCard {
            title: "Environmental Ecosystems",
            description: "Contributing to environmental protection through innovative eco-friendly technologies.",
            badge: None,
        },
        LabeledCard {
            title: "Public Health",
            description: "Promoting community health through safe and hygienic waste disposal methods.",
            badge: None,
        },
        LabeledCard {
            title: "Future Generations",
            description: "Ensuring a sustainable and clean environment for generations to come.",
            badge: None,
        },
    ],
    values: &[
        LabeledCard {
            title: "Innovation",
            description: "Pioneering sustainable solutions for complex environmental challenges",
            badge: None,
        },
        LabeledCard {
            title: "Sustainability",
            description: "Committed to protecting our planet for future generations",
            badge: None,
        },
        LabeledCard {
            title: "Excellence",
            description: "Delivering the highest quality products and services",
            badge: None,
        },
        LabeledCard {
            title: "Integrity",
            description: "Building trust through transparent and ethical practices",
            badge: None,
        },
    ],
    benefits: &[
        LabeledCard {
            title: "Environmental Impact",
            description: "Reduce carbon footprint and promote sustainable waste disposal practices",
            badge: Some("🌱"),
        },
        LabeledCard {
            title: "Cost Effectiveness",
            description: "Lower operational costs through efficient waste processing and management",
            badge: Some("💰"),
        },
        LabeledCard {
            title: "Health & Safety",
            description: "Ensure community health through safe, hygienic waste disposal methods",
            badge: Some("🏥"),
        },
        LabeledCard {
            title: "Compliance",
            description: "Meet all environmental regulations and waste management standards",
            badge: Some("✅"),
        },
        LabeledCard {
            title: "Reliability",
            description: "Robust, durable systems designed for continuous operation",
            badge: Some("🔧"),
        },
        LabeledCard {
            title: "Support",
            description: "Comprehensive technical support and maintenance services",
            badge: Some("🤝"),
        },
    ],
    faqs: &[
        Faq {
            question: "How long does installation take?",
            answer: "Installation typically takes 1-3 days depending on the system size and complexity. Our team ensures minimal disruption to your operations.",
        },
        Faq {
            question: "Do you provide training for staff?",
            answer: "Yes, we provide comprehensive training for your staff as part of our installation package, ensuring proper operation and maintenance.",
        },
        Faq {
            question: "What maintenance is required?",
            answer: "Our systems require minimal maintenance. We offer service packages that include regular inspections and preventive maintenance.",
        },
        Faq {
            question: "Are your systems environmentally compliant?",
            answer: "Absolutely. All our systems meet or exceed environmental regulations and emissions standards for safe operation.",
        },
    ],
    business_hours: &[
        BusinessHours { days: "Monday - Friday", hours: "9:00 AM - 6:00 PM" },
        BusinessHours { days: "Saturday", hours: "10:00 AM - 4:00 PM" },
        BusinessHours { days: "Sunday", hours: "Closed" },
    ],
    story: "Sackhe Technologies Pvt Ltd was founded with a vision to address one of the most pressing challenges of our time: sustainable waste management. Our journey began with the recognition that traditional waste disposal methods were not only harming our environment but also posing significant health risks to communities worldwide.

Through extensive research and development, we have pioneered innovative solutions that combine cutting-edge technology with environmental consciousness. Our team of dedicated engineers, environmental scientists, and sustainability experts work tirelessly to create products that not only solve immediate waste management problems but also contribute to long-term environmental protection.

Today, we specialize in **emission-controlled incinerators** and comprehensive waste management systems that serve diverse sectors including educational institutions, healthcare facilities, municipalities, and industrial complexes. Our solutions are designed to promote environmental sustainability, enhance operational efficiency, and contribute to public health and safety.
",
    what_we_do: "Sackhe Technologies specializes in innovative sustainable solutions addressing critical challenges across various industries. Our core expertise includes emission-controlled incinerators and eco-friendly waste management solutions that promote environmental sustainability, enhance operational efficiency, and contribute to public health and safety.",
    footer_blurb: "Leading the way in sustainable waste management solutions for a cleaner, healthier future.",
};
