use chrono::Utc;
use tracing::info;

use common::{Content, ContentType, Role, User};

use crate::config::SeedConfig;
use crate::error::Result;
use crate::password::PasswordHashing;

/// Identifier of the synthetic admin account.
pub const ADMIN_ID: &str = "admin_001";
pub const ADMIN_NICKNAME: &str = "Admin";
/// Login key of the synthetic admin account. Not an email address.
pub const ADMIN_EMAIL: &str = "Admin";
pub const DEFAULT_ADMIN_PASSWORD: &str = "ep1so1n1";

struct SampleContent {
    id: &'static str,
    content_type: ContentType,
    title: &'static str,
    description: &'static str,
    image_url: &'static str,
}

/// Content seeded into an empty collection, in feed order.
const SAMPLE_CONTENT: &[SampleContent] = &[
    SampleContent {
        id: "news_001",
        content_type: ContentType::News,
        title: "Cultur Platform Launch",
        description: "The new multimedia platform Cultur has officially launched, bringing together music, videos, and news in one place.",
        image_url: "https://picsum.photos/seed/news1/600/400",
    },
    SampleContent {
        id: "video_001",
        content_type: ContentType::Video,
        title: "Live Concert: The Rockers",
        description: "An exclusive recording of The Rockers' latest live performance. Experience the energy!",
        image_url: "https://picsum.photos/seed/video1/600/400",
    },
    SampleContent {
        id: "music_001",
        content_type: ContentType::Music,
        title: "Chill Beats Mix",
        description: "A 2-hour mix of instrumental chillhop beats perfect for studying or relaxing.",
        image_url: "https://picsum.photos/seed/music1/600/400",
    },
    SampleContent {
        id: "music_002",
        content_type: ContentType::Music,
        title: "Synthwave Dreams",
        description: "Journey through a retro-futuristic soundscape with this synthwave compilation.",
        image_url: "https://picsum.photos/seed/music2/600/400",
    },
];

/// Append the synthetic admin account if `users` holds no admin.
///
/// Returns `true` if the account was added.
pub fn ensure_admin(
    users: &mut Vec<User>,
    seed: &SeedConfig,
    hashing: &PasswordHashing,
) -> Result<bool> {
    if users.iter().any(User::is_admin) {
        return Ok(false);
    }

    users.push(User {
        id: ADMIN_ID.to_string(),
        nickname: ADMIN_NICKNAME.to_string(),
        email: ADMIN_EMAIL.to_string(),
        password_hash: hashing.hash(&seed.admin_password)?,
        role: Role::Admin,
    });
    info!("Seeded default admin account '{}'", ADMIN_EMAIL);

    Ok(true)
}

/// Replace raw passwords left by the web portal with salted hashes.
///
/// Returns the number of accounts rewritten.
pub fn hash_plaintext_passwords(users: &mut [User], hashing: &PasswordHashing) -> Result<usize> {
    let mut rewritten = 0;
    for user in users
        .iter_mut()
        .filter(|u| !PasswordHashing::is_hashed(&u.password_hash))
    {
        user.password_hash = hashing.hash(&user.password_hash)?;
        rewritten += 1;
    }

    if rewritten > 0 {
        info!("Hashed {} stored plain-text passwords", rewritten);
    }
    Ok(rewritten)
}

/// The sample feed, attributed to `author_id` and stamped with the current time.
pub fn sample_content(author_id: &str) -> Vec<Content> {
    let now = Utc::now();
    let content: Vec<Content> = SAMPLE_CONTENT
        .iter()
        .map(|sample| Content {
            id: sample.id.to_string(),
            content_type: sample.content_type,
            title: sample.title.to_string(),
            description: sample.description.to_string(),
            url: "#".to_string(),
            image_url: sample.image_url.to_string(),
            author_id: author_id.to_string(),
            created_at: now,
        })
        .collect();

    info!("Seeded {} sample content items", content.len());
    content
}

/// Identifier the sample content is attributed to: the first admin, if any.
pub fn sample_author(users: &[User]) -> &str {
    users
        .iter()
        .find(|u| u.is_admin())
        .map_or(ADMIN_ID, |u| u.id.as_str())
}
