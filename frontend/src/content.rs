//! Static marketing copy shown across the pages.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub icon: &'static str,
    pub number: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub gradient: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceCard {
    pub id: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub price: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub features: [&'static str; 6],
    pub gradient: &'static str,
    pub price: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingPlan {
    pub name: &'static str,
    pub price: &'static str,
    pub yearly_price: &'static str,
    pub description: &'static str,
    pub features: [&'static str; 6],
    pub popular: bool,
    pub gradient: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub company: &'static str,
    pub rating: u8,
    pub comment: &'static str,
    pub avatar: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub image: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactInfo {
    pub icon: &'static str,
    pub title: &'static str,
    pub value: &'static str,
    pub description: &'static str,
}

pub const HOME_STATS: [Stat; 4] = [
    Stat { icon: "👥", number: "2,000+", label: "Happy Clients" },
    Stat { icon: "📈", number: "500%", label: "Average Growth" },
    Stat { icon: "🎯", number: "95%", label: "Success Rate" },
    Stat { icon: "🏆", number: "50+", label: "Awards Won" },
];

pub const HOME_FEATURES: [Feature; 3] = [
    Feature {
        icon: "🌐",
        title: "Global Reach",
        description: "Connect with audiences worldwide through our comprehensive digital marketing strategies.",
        gradient: "linear-gradient(135deg, #3b82f6, #06b6d4)",
    },
    Feature {
        icon: "📊",
        title: "Data-Driven",
        description: "Make informed decisions with our advanced analytics and performance tracking.",
        gradient: "linear-gradient(135deg, #a855f7, #ec4899)",
    },
    Feature {
        icon: "⚡",
        title: "Lightning Fast",
        description: "Quick implementation and rapid results with our optimized marketing campaigns.",
        gradient: "linear-gradient(135deg, #f97316, #ef4444)",
    },
];

pub const HERO_BADGES: [(&str, &str); 3] = [("✨", "Innovation"), ("🌊", "Growth"), ("🚀", "Success")];

pub const HOME_CARDS: [ServiceCard; 3] = [
    ServiceCard {
        id: "bundle-kits",
        icon: "📦",
        title: "Bundle Kits",
        description: "Complete marketing packages designed for businesses of all sizes with everything you need to succeed.",
        price: "Starting from $1,200/month",
    },
    ServiceCard {
        id: "free-trial",
        icon: "⚡",
        title: "7-Day Free Trial",
        description: "Experience our premium services risk-free with a full week of professional digital marketing.",
        price: "FREE for 7 days",
    },
    ServiceCard {
        id: "consultation",
        icon: "📅",
        title: "Free Consultation",
        description: "Schedule a free consultation call with our experts to discuss your business goals.",
        price: "FREE Consultation",
    },
];

pub const SERVICES: [Service; 10] = [
    Service {
        icon: "📦",
        title: "Bundle Kits",
        description: "Complete marketing packages designed for businesses of all sizes with everything you need to succeed.",
        features: [
            "Multiple service combinations",
            "Customized for your industry",
            "Comprehensive strategy planning",
            "Dedicated project manager",
            "Priority support access",
            "Performance guarantees",
        ],
        gradient: "linear-gradient(135deg, #8b5cf6, #a855f7)",
        price: "Starting from $1,200/month",
    },
    Service {
        icon: "⚡",
        title: "7-Day Free Trial",
        description: "Experience our premium services risk-free with a full week of professional digital marketing.",
        features: [
            "Full access to all services",
            "No credit card required",
            "Real results in 7 days",
            "Expert consultation included",
            "Performance report provided",
            "Easy cancellation anytime",
        ],
        gradient: "linear-gradient(135deg, #eab308, #f97316)",
        price: "FREE for 7 days",
    },
    Service {
        icon: "📅",
        title: "Monthly Subscription",
        description: "Flexible monthly plans that grow with your business and adapt to your changing needs.",
        features: [
            "Cancel anytime",
            "Scalable services",
            "Monthly performance reviews",
            "Regular strategy updates",
            "Email and phone support",
            "Access to marketing tools",
        ],
        gradient: "linear-gradient(135deg, #3b82f6, #06b6d4)",
        price: "Starting from $800/month",
    },
    Service {
        icon: "👑",
        title: "Yearly Subscription",
        description: "Save big with our annual plans and get premium features at discounted rates.",
        features: [
            "Save up to 30% vs monthly",
            "Priority customer support",
            "Exclusive premium features",
            "Quarterly strategy sessions",
            "Advanced analytics access",
            "Custom integrations included",
        ],
        gradient: "linear-gradient(135deg, #10b981, #14b8a6)",
        price: "Starting from $560/month",
    },
    Service {
        icon: "🔍",
        title: "Search Engine Optimization (SEO)",
        description: "Improve your website's visibility in search engines and drive organic traffic.",
        features: [
            "Keyword research and optimization",
            "On-page and off-page SEO",
            "Technical SEO audit",
            "Local SEO optimization",
            "Content optimization",
            "Link building strategies",
        ],
        gradient: "linear-gradient(135deg, #3b82f6, #06b6d4)",
        price: "Starting from $500/month",
    },
    Service {
        icon: "📣",
        title: "Social Media Marketing",
        description: "Build your brand presence and engage with your audience across all social platforms.",
        features: [
            "Platform-specific strategies",
            "Content creation and curation",
            "Community management",
            "Paid social advertising",
            "Influencer partnerships",
            "Social media analytics",
        ],
        gradient: "linear-gradient(135deg, #a855f7, #ec4899)",
        price: "Starting from $800/month",
    },
    Service {
        icon: "✍️",
        title: "Content Marketing",
        description: "Create valuable, relevant content that attracts and engages your target audience.",
        features: [
            "Blog content creation",
            "Video content production",
            "Infographic design",
            "Email marketing campaigns",
            "Content strategy development",
            "Content performance analysis",
        ],
        gradient: "linear-gradient(135deg, #22c55e, #10b981)",
        price: "Starting from $600/month",
    },
    Service {
        icon: "📊",
        title: "Pay-Per-Click (PPC) Advertising",
        description: "Drive immediate traffic and conversions with targeted paid advertising campaigns.",
        features: [
            "Google Ads management",
            "Facebook/Instagram ads",
            "Remarketing campaigns",
            "A/B testing and optimization",
            "Conversion tracking",
            "ROI optimization",
        ],
        gradient: "linear-gradient(135deg, #f97316, #ef4444)",
        price: "Starting from $1000/month",
    },
    Service {
        icon: "✉️",
        title: "Email Marketing",
        description: "Nurture leads and build lasting relationships with your customers through email.",
        features: [
            "Email list building",
            "Automated email sequences",
            "Newsletter campaigns",
            "Segmentation strategies",
            "A/B testing",
            "Performance analytics",
        ],
        gradient: "linear-gradient(135deg, #6366f1, #a855f7)",
        price: "Starting from $400/month",
    },
    Service {
        icon: "📱",
        title: "Mobile Marketing",
        description: "Optimize your marketing efforts for mobile users and mobile-first experiences.",
        features: [
            "Mobile app marketing",
            "SMS marketing campaigns",
            "Mobile-optimized content",
            "Location-based marketing",
            "Mobile advertising",
            "Mobile analytics",
        ],
        gradient: "linear-gradient(135deg, #14b8a6, #3b82f6)",
        price: "Starting from $700/month",
    },
];

pub const PRICING_PLANS: [PricingPlan; 3] = [
    PricingPlan {
        name: "Starter",
        price: "$800",
        yearly_price: "$560",
        description: "Perfect for small businesses getting started",
        features: [
            "SEO Optimization",
            "Social Media Management",
            "Content Creation",
            "Email Marketing",
            "Basic Analytics",
            "Email Support",
        ],
        popular: false,
        gradient: "linear-gradient(135deg, #3b82f6, #06b6d4)",
    },
    PricingPlan {
        name: "Professional",
        price: "$1,200",
        yearly_price: "$840",
        description: "Ideal for growing businesses",
        features: [
            "Everything in Starter",
            "PPC Advertising",
            "Advanced Analytics",
            "Priority Support",
            "Custom Strategy",
            "Monthly Reports",
        ],
        popular: true,
        gradient: "linear-gradient(135deg, #a855f7, #ec4899)",
    },
    PricingPlan {
        name: "Enterprise",
        price: "$2,000",
        yearly_price: "$1,400",
        description: "For established businesses with big goals",
        features: [
            "Everything in Professional",
            "Bundle Kit Access",
            "Dedicated Manager",
            "Custom Integrations",
            "24/7 Support",
            "Performance Guarantee",
        ],
        popular: false,
        gradient: "linear-gradient(135deg, #10b981, #14b8a6)",
    },
];

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "John Smith",
        company: "TechStart Inc.",
        rating: 5,
        comment: "HiveSurf transformed our digital presence. Our organic traffic increased by 300% in just 6 months!",
        avatar: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=100&h=100&fit=crop&crop=face",
    },
    Testimonial {
        name: "Sarah Johnson",
        company: "Fashion Forward",
        rating: 5,
        comment: "Their social media marketing strategies helped us reach 50K+ new followers and increase sales by 150%.",
        avatar: "https://images.unsplash.com/photo-1494790108755-2616b612b786?w=100&h=100&fit=crop&crop=face",
    },
    Testimonial {
        name: "Mike Chen",
        company: "Local Restaurant",
        rating: 5,
        comment: "The local SEO work HiveSurf did for us brought in so many new customers. Highly recommended!",
        avatar: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=100&h=100&fit=crop&crop=face",
    },
];

pub const VALUES: [Feature; 4] = [
    Feature {
        icon: "❤️",
        title: "Passion",
        description: "We are passionate about digital marketing and helping businesses succeed.",
        gradient: "linear-gradient(135deg, #ef4444, #ec4899)",
    },
    Feature {
        icon: "🎯",
        title: "Excellence",
        description: "We strive for excellence in everything we do, delivering the best results.",
        gradient: "linear-gradient(135deg, #3b82f6, #06b6d4)",
    },
    Feature {
        icon: "👥",
        title: "Collaboration",
        description: "We believe in the power of teamwork and collaboration with our clients.",
        gradient: "linear-gradient(135deg, #22c55e, #10b981)",
    },
    Feature {
        icon: "🏆",
        title: "Innovation",
        description: "We constantly innovate and stay ahead of digital marketing trends.",
        gradient: "linear-gradient(135deg, #a855f7, #ec4899)",
    },
];

pub const TEAM: [TeamMember; 4] = [
    TeamMember {
        name: "Alex Johnson",
        role: "CEO & Founder",
        image: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=400&h=400&fit=crop&crop=face",
        description: "Digital marketing expert with 10+ years of experience.",
    },
    TeamMember {
        name: "Sarah Chen",
        role: "Marketing Director",
        image: "https://images.unsplash.com/photo-1494790108755-2616b612b786?w=400&h=400&fit=crop&crop=face",
        description: "Specialist in social media and content marketing strategies.",
    },
    TeamMember {
        name: "Mike Rodriguez",
        role: "SEO Specialist",
        image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400&h=400&fit=crop&crop=face",
        description: "Expert in search engine optimization and analytics.",
    },
    TeamMember {
        name: "Emily Davis",
        role: "Creative Director",
        image: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=400&h=400&fit=crop&crop=face",
        description: "Creative genius behind our visual and branding strategies.",
    },
];

pub const ACHIEVEMENTS: [(&str, &str); 4] = [
    ("500+", "Projects Completed"),
    ("95%", "Client Satisfaction"),
    ("50+", "Team Members"),
    ("10+", "Years Experience"),
];

pub const CONTACT_INFO: [ContactInfo; 4] = [
    ContactInfo {
        icon: "📞",
        title: "Phone",
        value: "+91 7008310868",
        description: "Call us anytime",
    },
    ContactInfo {
        icon: "✉️",
        title: "Email",
        value: "info@hivesurf.com",
        description: "Send us an email",
    },
    ContactInfo {
        icon: "📍",
        title: "Location",
        value: "India",
        description: "Visit our office",
    },
    ContactInfo {
        icon: "🕘",
        title: "Business Hours",
        value: "Mon - Fri: 9AM - 6PM",
        description: "We're here to help",
    },
];

pub fn plan_named(name: &str) -> Option<PricingPlan> {
    PRICING_PLANS.into_iter().find(|plan| plan.name == name)
}
