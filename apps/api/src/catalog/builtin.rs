use super::CareerDefinition;

#[allow(clippy::too_many_arguments)]
fn career(
    id: &str,
    title: &str,
    description: &str,
    required_skills: &[&str],
    interests: &[&str],
    education_level: &[&str],
    average_salary: &str,
    growth_rate: &str,
) -> CareerDefinition {
    let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();
    CareerDefinition {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        required_skills: owned(required_skills),
        interests: owned(interests),
        education_level: owned(education_level),
        average_salary: average_salary.to_string(),
        growth_rate: growth_rate.to_string(),
    }
}

/// Built-in career catalog, in presentation order.
pub(super) fn careers() -> Vec<CareerDefinition> {
    vec![
        career(
            "software-engineer",
            "Software Engineer",
            "Design, develop, and maintain software applications and systems.",
            &["programming", "problem solving", "algorithms", "data structures", "javascript", "python", "java", "software development"],
            &["technology", "coding", "innovation", "problem solving"],
            &["bachelors", "masters"],
            "$95,000 - $150,000",
            "High (22% growth)",
        ),
        career(
            "data-scientist",
            "Data Scientist",
            "Analyze complex data to help organizations make better decisions.",
            &["python", "statistics", "machine learning", "data analysis", "sql", "r", "data visualization"],
            &["data", "analytics", "mathematics", "research"],
            &["bachelors", "masters", "phd"],
            "$100,000 - $160,000",
            "Very High (36% growth)",
        ),
        career(
            "ux-designer",
            "UX/UI Designer",
            "Create user-friendly interfaces and enhance user experience.",
            &["design", "figma", "adobe", "user research", "prototyping", "wireframing", "creativity"],
            &["design", "creativity", "user experience", "visual arts"],
            &["bachelors", "associates"],
            "$75,000 - $120,000",
            "High (16% growth)",
        ),
        career(
            "digital-marketing",
            "Digital Marketing Manager",
            "Develop and execute online marketing strategies to grow brands.",
            &["marketing", "seo", "content creation", "social media", "analytics", "communication"],
            &["marketing", "communication", "creativity", "business"],
            &["bachelors", "associates"],
            "$65,000 - $110,000",
            "High (10% growth)",
        ),
        career(
            "project-manager",
            "Project Manager",
            "Lead teams and manage projects from inception to completion.",
            &["leadership", "communication", "organization", "planning", "agile", "project management"],
            &["leadership", "organization", "business", "teamwork"],
            &["bachelors", "masters"],
            "$80,000 - $130,000",
            "Moderate (7% growth)",
        ),
        career(
            "cybersecurity",
            "Cybersecurity Analyst",
            "Protect organizations from cyber threats and security breaches.",
            &["security", "networking", "penetration testing", "risk assessment", "firewalls", "encryption"],
            &["security", "technology", "problem solving", "investigation"],
            &["bachelors", "masters"],
            "$85,000 - $140,000",
            "Very High (33% growth)",
        ),
        career(
            "product-manager",
            "Product Manager",
            "Guide product development strategy and roadmap for successful launches.",
            &["product strategy", "communication", "analytics", "leadership", "market research"],
            &["business", "strategy", "innovation", "technology"],
            &["bachelors", "masters", "mba"],
            "$90,000 - $150,000",
            "High (14% growth)",
        ),
        career(
            "graphic-designer",
            "Graphic Designer",
            "Create visual content for brands, marketing materials, and digital media.",
            &["adobe", "illustrator", "photoshop", "creativity", "design", "typography", "branding"],
            &["design", "creativity", "visual arts", "communication"],
            &["bachelors", "associates"],
            "$50,000 - $80,000",
            "Moderate (3% growth)",
        ),
        career(
            "business-analyst",
            "Business Analyst",
            "Bridge the gap between IT and business to improve processes.",
            &["analysis", "communication", "sql", "excel", "documentation", "problem solving"],
            &["business", "analytics", "problem solving", "strategy"],
            &["bachelors", "masters"],
            "$70,000 - $110,000",
            "Moderate (11% growth)",
        ),
        career(
            "nurse",
            "Registered Nurse",
            "Provide patient care and support in healthcare settings.",
            &["patient care", "medical knowledge", "communication", "empathy", "attention to detail"],
            &["healthcare", "helping others", "medicine", "caregiving"],
            &["associates", "bachelors"],
            "$60,000 - $90,000",
            "High (9% growth)",
        ),
        career(
            "financial-analyst",
            "Financial Analyst",
            "Analyze financial data and provide insights for investment decisions.",
            &["finance", "excel", "modeling", "forecasting", "analysis", "reporting"],
            &["finance", "economics", "analytics", "business"],
            &["bachelors", "masters", "mba"],
            "$70,000 - $115,000",
            "Moderate (6% growth)",
        ),
        career(
            "content-writer",
            "Content Writer",
            "Create engaging written content for various platforms and audiences.",
            &["writing", "creativity", "seo", "research", "editing", "storytelling"],
            &["writing", "communication", "creativity", "marketing"],
            &["bachelors", "associates"],
            "$45,000 - $75,000",
            "Moderate (8% growth)",
        ),
        career(
            "hr-manager",
            "Human Resources Manager",
            "Oversee recruitment, employee relations, and organizational development.",
            &["communication", "leadership", "conflict resolution", "recruiting", "training", "employee relations"],
            &["people management", "organization", "business", "leadership"],
            &["bachelors", "masters"],
            "$75,000 - $120,000",
            "Moderate (7% growth)",
        ),
        career(
            "web-developer",
            "Web Developer",
            "Build and maintain websites using modern web technologies.",
            &["html", "css", "javascript", "react", "responsive design", "web development"],
            &["technology", "coding", "web design", "creativity"],
            &["bachelors", "associates", "high-school"],
            "$65,000 - $110,000",
            "High (13% growth)",
        ),
        career(
            "sales-manager",
            "Sales Manager",
            "Lead sales teams and develop strategies to drive revenue growth.",
            &["sales", "leadership", "communication", "negotiation", "crm", "strategy"],
            &["business", "leadership", "communication", "strategy"],
            &["bachelors", "associates"],
            "$70,000 - $130,000",
            "Moderate (5% growth)",
        ),
        career(
            "teacher",
            "High School Teacher",
            "Educate and inspire students in various academic subjects.",
            &["teaching", "communication", "patience", "curriculum development", "classroom management"],
            &["education", "helping others", "communication", "learning"],
            &["bachelors", "masters"],
            "$50,000 - $75,000",
            "Low (4% growth)",
        ),
        career(
            "accountant",
            "Accountant",
            "Manage financial records and ensure accuracy in financial reporting.",
            &["accounting", "excel", "attention to detail", "gaap", "tax preparation", "auditing"],
            &["finance", "mathematics", "organization", "business"],
            &["bachelors", "masters"],
            "$55,000 - $90,000",
            "Moderate (6% growth)",
        ),
        career(
            "physical-therapist",
            "Physical Therapist",
            "Help patients recover mobility and manage pain through therapeutic exercises.",
            &["patient care", "rehabilitation", "anatomy", "communication", "empathy"],
            &["healthcare", "helping others", "fitness", "medicine"],
            &["masters", "phd"],
            "$75,000 - $105,000",
            "High (18% growth)",
        ),
        career(
            "civil-engineer",
            "Civil Engineer",
            "Design and oversee construction of infrastructure projects.",
            &["engineering", "cad", "mathematics", "project management", "structural analysis"],
            &["engineering", "construction", "mathematics", "problem solving"],
            &["bachelors", "masters"],
            "$75,000 - $115,000",
            "Moderate (8% growth)",
        ),
        career(
            "social-media-manager",
            "Social Media Manager",
            "Develop and execute social media strategies to build brand presence.",
            &["social media", "content creation", "analytics", "creativity", "communication", "marketing"],
            &["social media", "marketing", "creativity", "communication"],
            &["bachelors", "associates"],
            "$50,000 - $85,000",
            "High (10% growth)",
        ),
        career(
            "mechanical-engineer",
            "Mechanical Engineer",
            "Design and develop mechanical systems and devices.",
            &["engineering", "cad", "mechanics", "thermodynamics", "problem solving", "mathematics"],
            &["engineering", "innovation", "technology", "mathematics"],
            &["bachelors", "masters"],
            "$75,000 - $120,000",
            "Moderate (7% growth)",
        ),
        career(
            "video-editor",
            "Video Editor",
            "Edit and produce video content for various media platforms.",
            &["video editing", "premiere pro", "creativity", "storytelling", "after effects"],
            &["video production", "creativity", "media", "visual arts"],
            &["bachelors", "associates", "high-school"],
            "$45,000 - $80,000",
            "High (12% growth)",
        ),
        career(
            "architect",
            "Architect",
            "Design buildings and structures that are functional and aesthetically pleasing.",
            &["architecture", "cad", "design", "creativity", "building codes", "3d modeling"],
            &["architecture", "design", "creativity", "construction"],
            &["bachelors", "masters"],
            "$70,000 - $115,000",
            "Low (3% growth)",
        ),
        career(
            "pharmacist",
            "Pharmacist",
            "Dispense medications and provide healthcare advice to patients.",
            &["pharmacy", "medical knowledge", "attention to detail", "communication", "patient care"],
            &["healthcare", "medicine", "helping others", "science"],
            &["phd"],
            "$110,000 - $140,000",
            "Low (2% growth)",
        ),
        career(
            "ai-engineer",
            "AI/Machine Learning Engineer",
            "Develop artificial intelligence systems and machine learning models.",
            &["machine learning", "python", "tensorflow", "neural networks", "algorithms", "data science"],
            &["artificial intelligence", "technology", "mathematics", "innovation"],
            &["bachelors", "masters", "phd"],
            "$120,000 - $180,000",
            "Very High (40% growth)",
        ),
        career(
            "chef",
            "Executive Chef",
            "Lead kitchen operations and create innovative culinary experiences.",
            &["cooking", "creativity", "leadership", "menu planning", "food safety", "culinary arts"],
            &["cooking", "creativity", "food", "leadership"],
            &["associates", "high-school"],
            "$50,000 - $85,000",
            "Moderate (6% growth)",
        ),
        career(
            "environmental-scientist",
            "Environmental Scientist",
            "Study the environment and develop solutions to environmental problems.",
            &["research", "data analysis", "environmental science", "fieldwork", "report writing"],
            &["environment", "science", "sustainability", "research"],
            &["bachelors", "masters", "phd"],
            "$60,000 - $95,000",
            "Moderate (8% growth)",
        ),
        career(
            "lawyer",
            "Lawyer",
            "Provide legal counsel and represent clients in legal matters.",
            &["law", "research", "communication", "critical thinking", "negotiation", "writing"],
            &["law", "justice", "problem solving", "advocacy"],
            &["phd"],
            "$90,000 - $160,000",
            "Moderate (6% growth)",
        ),
        career(
            "psychologist",
            "Clinical Psychologist",
            "Assess and treat mental, emotional, and behavioral disorders.",
            &["psychology", "empathy", "communication", "assessment", "counseling", "research"],
            &["psychology", "helping others", "mental health", "research"],
            &["masters", "phd"],
            "$75,000 - $110,000",
            "High (14% growth)",
        ),
        career(
            "interior-designer",
            "Interior Designer",
            "Create functional and aesthetically pleasing interior spaces.",
            &["design", "creativity", "cad", "color theory", "space planning", "client relations"],
            &["design", "creativity", "visual arts", "architecture"],
            &["bachelors", "associates"],
            "$50,000 - $85,000",
            "Low (4% growth)",
        ),
    ]
}
