//! Landing page copy as static data.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub content: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChildSnapshot {
    pub name: &'static str,
    pub progress: u8,
    pub average: u8,
    pub streak: u32,
    pub next_quiz: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

pub const BRAND: &str = "Rafiq";

pub const NAV_ITEMS: [&str; 5] = ["Features", "For Teachers", "For Parents", "About", "Contact"];

/// `#for-teachers` style anchor: lowercased, first space turned into a dash.
pub fn nav_anchor(item: &str) -> String {
    format!("#{}", item.to_lowercase().replacen(' ', "-", 1))
}

pub const HERO_BADGE: &str = "Your Learning Companion";
pub const HERO_TITLE: &str = "Meet Rafiq – Your All-in-One Learning Companion";
pub const HERO_SUBTITLE: &str = "A new way to learn, teach, and parent – built for today's world of distractions. Bringing calm, focus, and progress back into education.";
pub const HERO_ACTIONS: [&str; 3] = [
    "Explore Student Dashboard",
    "Try Smart Tracker",
    "Discover Parent Cards",
];

pub const WHY_RAFIQ: [Feature; 3] = [
    Feature {
        icon: "📚",
        title: "Student Dashboard",
        description: "A clean, distraction-free interface that helps students focus on what matters most – their learning journey.",
    },
    Feature {
        icon: "📅",
        title: "Smart Calendar & Tracker",
        description: "AI-powered scheduling that adapts to your peak learning hours and tracks progress automatically.",
    },
    Feature {
        icon: "🎓",
        title: "Courses Page",
        description: "Beautifully organized course materials with progress tracking and personalized recommendations.",
    },
];

pub const AI_COMPANION: [Feature; 4] = [
    Feature {
        icon: "🧠",
        title: "Explain Hard Topics",
        description: "Break down complex concepts into digestible explanations tailored to your learning style.",
    },
    Feature {
        icon: "⚡",
        title: "Peak Study Time Detection",
        description: "AI analyzes your patterns to identify when you're most focused and productive.",
    },
    Feature {
        icon: "💬",
        title: "Mentor & Coach",
        description: "Talk like a mentor, coach, or friend – providing emotional support when you need it most.",
    },
    Feature {
        icon: "🗓",
        title: "Daily Study Planner",
        description: "Personalized daily schedules that adapt to your goals, deadlines, and energy levels.",
    },
];

pub const TEACHER_POINTS: [&str; 4] = [
    "Clean dashboard with intuitive navigation",
    "Easy content upload with AI assistance",
    "Real-time student analytics and insights",
    "AI helps summarize reviews and suggest feedback",
];

pub const TEACHER_STATS: [Stat; 3] = [
    Stat { label: "Class Average", value: "87%" },
    Stat { label: "Assignments Submitted", value: "24/28" },
    Stat { label: "AI Feedback Generated", value: "156" },
];

pub const FAMILY_SNAPS: [ChildSnapshot; 3] = [
    ChildSnapshot { name: "Emma", progress: 92, average: 88, streak: 12, next_quiz: "Math Quiz" },
    ChildSnapshot { name: "Alex", progress: 78, average: 85, streak: 8, next_quiz: "Science Test" },
    ChildSnapshot { name: "Sam", progress: 95, average: 91, streak: 15, next_quiz: "History Essay" },
];

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Sarah Chen",
        role: "High School Student",
        content: "Rafiq helped me understand calculus concepts I was struggling with for months. The AI explains things in a way that just clicks!",
    },
    Testimonial {
        name: "Mr. Rodriguez",
        role: "Math Teacher",
        content: "The analytics dashboard gives me insights I never had before. I can see exactly where each student needs help.",
    },
    Testimonial {
        name: "Jennifer Park",
        role: "Parent of Two",
        content: "The family cards are amazing! I can see both my kids' progress at a glance and know exactly how to support them.",
    },
];

pub const CONTACT_EMAIL: &str = "hello@rafiq.education";
pub const CONTACT_PHONE: &str = "+1 (555) RAFIQ-AI";
pub const CONTACT_ROLES: [&str; 4] = ["Student", "Teacher", "Parent", "Administrator"];

pub const FOOTER_COLUMNS: [(&str, [&str; 3]); 3] = [
    ("Features", ["Student Dashboard", "Smart Tracker", "Family Snaps"]),
    ("About", ["Our Story", "Team", "Careers"]),
    ("Legal", ["Terms of Service", "Privacy Policy", "Cookies"]),
];

/// First letter for avatar bubbles.
pub fn initial(name: &str) -> String {
    name.chars().next().map(|c| c.to_string()).unwrap_or_default()
}
