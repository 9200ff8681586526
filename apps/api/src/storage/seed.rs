//! Sample data loaded at startup so the UI has something to show.

use chrono::{DateTime, Duration, Utc};
use tracing::info;

use crate::models::{
    ApplicationStatus, ChatRole, NewApplication, NewChatMessage, NewJob, NewUser, User,
};
use crate::storage::{Storage, StorageError};

struct SampleJob {
    company: &'static str,
    initials: &'static str,
    color: &'static str,
    position: &'static str,
    location: &'static str,
    salary: &'static str,
    description: &'static str,
    requirements: &'static str,
    days_ago: i64,
    tags: &'static [&'static str],
}

const SAMPLE_JOBS: &[SampleJob] = &[
    SampleJob {
        company: "TechDomain",
        initials: "TD",
        color: "indigo",
        position: "Senior Frontend Developer",
        location: "San Francisco, CA (Remote)",
        salary: "$90K - $120K",
        description: "TechDomain is looking for a senior frontend developer with experience in React, TypeScript, and responsive design...",
        requirements: "5+ years of experience with modern JavaScript frameworks\nExperience with TypeScript\nStrong CSS/SCSS skills",
        days_ago: 3,
        tags: &["React", "TypeScript", "Tailwind"],
    },
    SampleJob {
        company: "InnoSystems",
        initials: "IS",
        color: "blue",
        position: "Full Stack Engineer",
        location: "Austin, TX",
        salary: "$110K - $140K",
        description: "InnoSystems is seeking a full stack engineer to develop and maintain web applications using React and Node.js...",
        requirements: "3+ years of experience with Node.js\nExperience with React\nFamiliarity with SQL databases",
        days_ago: 7,
        tags: &["Node.js", "React", "PostgreSQL"],
    },
    SampleJob {
        company: "GlobalLink",
        initials: "GL",
        color: "purple",
        position: "UX/UI Designer",
        location: "New York, NY (Hybrid)",
        salary: "$85K - $115K",
        description: "GlobalLink is looking for a talented UX/UI designer to create exceptional user experiences for our products...",
        requirements: "Portfolio showcasing UI design work\nExperience with design tools like Figma\nKnowledge of user research methodologies",
        days_ago: 14,
        tags: &["Figma", "Adobe XD", "User Research"],
    },
    SampleJob {
        company: "NexaTech",
        initials: "NX",
        color: "pink",
        position: "Product Manager",
        location: "Chicago, IL",
        salary: "$120K - $150K",
        description: "NexaTech is seeking an experienced product manager to lead the development of our SaaS platform...",
        requirements: "5+ years of product management experience\nAgile methodology experience\nTechnical background preferred",
        days_ago: 21,
        tags: &["Product Management", "Agile", "SaaS"],
    },
    SampleJob {
        company: "BlueThink Technologies",
        initials: "BT",
        color: "blue",
        position: "Frontend Developer",
        location: "San Francisco, CA (Remote)",
        salary: "$90K - $120K",
        description: "BlueThink Technologies is looking for a frontend developer to build user interfaces with React and TypeScript...",
        requirements: "3+ years of experience with React\nStrong TypeScript skills\nKnowledge of modern CSS frameworks",
        days_ago: 2,
        tags: &["React", "TypeScript", "Tailwind"],
    },
    SampleJob {
        company: "GrowSmart Inc.",
        initials: "GS",
        color: "green",
        position: "Full Stack Developer",
        location: "Austin, TX",
        salary: "$110K - $140K",
        description: "GrowSmart Inc. is looking for a full stack developer with experience in Node.js and React...",
        requirements: "3+ years of experience with JavaScript\nFamiliarity with React and Node.js\nDatabase experience required",
        days_ago: 7,
        tags: &["Node.js", "React", "PostgreSQL"],
    },
    SampleJob {
        company: "VisualTech Studios",
        initials: "VT",
        color: "purple",
        position: "UI/UX Designer",
        location: "New York, NY (Hybrid)",
        salary: "$85K - $115K",
        description: "VisualTech Studios is seeking a UI/UX designer to create beautiful and functional interfaces...",
        requirements: "Strong portfolio of UI/UX work\nExperience with Figma and Adobe XD\nUnderstanding of user-centered design principles",
        days_ago: 5,
        tags: &["Figma", "Adobe XD", "User Research"],
    },
];

/// (job index, status, applied days ago, updated days ago, notes)
const SAMPLE_APPLICATIONS: &[(usize, ApplicationStatus, i64, i64, &str)] = &[
    (
        0,
        ApplicationStatus::Interview,
        3,
        1,
        "Had a great phone screening, moving to technical interview",
    ),
    (
        1,
        ApplicationStatus::InReview,
        7,
        7,
        "Application submitted, waiting for response",
    ),
    (
        2,
        ApplicationStatus::Rejected,
        14,
        10,
        "Not selected for the position",
    ),
    (
        3,
        ApplicationStatus::FinalInterview,
        21,
        3,
        "Final round of interviews scheduled",
    ),
];

/// (role, minutes ago, text)
const SAMPLE_CHAT: &[(ChatRole, i64, &str)] = &[
    (
        ChatRole::Assistant,
        30,
        "Hello Alex! I'm your JobNexus AI assistant. How can I help with your job search today?",
    ),
    (
        ChatRole::User,
        25,
        "I need help with my resume for a frontend developer position.",
    ),
    (
        ChatRole::Assistant,
        24,
        "I'd be happy to help with your resume! For frontend developer positions, consider highlighting these key areas:\n- Technical skills (JavaScript, React, CSS frameworks)\n- Responsive design experience\n- Portfolio projects with links\n- Performance optimization work\n\nWould you like me to review your current resume or help with specific sections?",
    ),
];

fn days_before(now: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    now - Duration::days(days)
}

/// Loads the demo user, jobs, applications and chat history. Returns the demo user.
pub async fn seed_sample_data(storage: &dyn Storage) -> Result<User, StorageError> {
    let now = Utc::now();

    let user = storage
        .create_user(NewUser {
            username: "alex".to_string(),
            password: "password123".to_string(),
            name: "Alex Johnson".to_string(),
            email: "alex@example.com".to_string(),
        })
        .await?;

    let mut jobs = Vec::with_capacity(SAMPLE_JOBS.len());
    for sample in SAMPLE_JOBS {
        let job = storage
            .create_job(NewJob {
                company_name: sample.company.to_string(),
                company_initials: sample.initials.to_string(),
                company_color: sample.color.to_string(),
                position: sample.position.to_string(),
                location: sample.location.to_string(),
                salary: sample.salary.to_string(),
                job_type: "Full-time".to_string(),
                description: sample.description.to_string(),
                requirements: sample.requirements.to_string(),
                posted_date: days_before(now, sample.days_ago),
                notion_page_id: String::new(),
                tags: sample.tags.iter().map(|t| t.to_string()).collect(),
            })
            .await;
        jobs.push(job);
    }

    for &(job_index, status, applied, updated, notes) in SAMPLE_APPLICATIONS {
        let mut application = NewApplication::new(user.id, jobs[job_index].id)
            .with_status(status)
            .with_notes(notes);
        application.applied_date = days_before(now, applied);
        application.last_updated = days_before(now, updated);
        storage.create_application(application).await?;
    }

    for &(role, minutes_ago, text) in SAMPLE_CHAT {
        storage
            .create_chat_message(NewChatMessage {
                user_id: user.id,
                message: text.to_string(),
                role,
                created_at: now - Duration::minutes(minutes_ago),
            })
            .await;
    }

    info!(
        "Seeded sample data: user '{}', {} jobs, {} applications, {} chat messages",
        user.username,
        jobs.len(),
        SAMPLE_APPLICATIONS.len(),
        SAMPLE_CHAT.len()
    );

    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DashboardStats;
    use crate::storage::MemStorage;

    #[tokio::test]
    async fn test_seed_populates_demo_user() {
        let store = MemStorage::new();
        let user = seed_sample_data(&store).await.unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.username, "alex");

        assert_eq!(store.get_jobs().await.len(), SAMPLE_JOBS.len());
        assert_eq!(store.get_applications(user.id).await.unwrap().len(), 4);
        assert_eq!(store.get_chat_messages(user.id).await.len(), 3);
    }

    #[tokio::test]
    async fn test_seed_dashboard_counts() {
        let store = MemStorage::new();
        let user = seed_sample_data(&store).await.unwrap();
        assert_eq!(
            store.get_dashboard_stats(user.id).await,
            DashboardStats {
                total_applications: 4,
                interview_invites: 2,
                in_progress: 1,
                rejected: 1,
            }
        );
    }

    #[tokio::test]
    async fn test_seed_twice_fails_on_username() {
        let store = MemStorage::new();
        seed_sample_data(&store).await.unwrap();
        assert!(matches!(
            seed_sample_data(&store).await,
            Err(StorageError::UsernameTaken(_))
        ));
    }
}
