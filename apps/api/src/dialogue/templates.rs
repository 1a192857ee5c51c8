//! Response template pools, one per intent.
//!
//! Slots use `{name}` placeholders filled by the responder via `str::replace`.
//! Data-dependent intents carry one template plus a fallback used when the
//! relevant profile data is empty; content-independent intents carry a pool
//! the responder samples uniformly at random.

/// Experience answer — fill `{entries}` and `{title}`.
pub const EXPERIENCE_TEMPLATE: &str = "I've built my experience through roles including {entries}. \
    Each of those positions strengthened the skills I'd bring to the {title} role.";

/// Experience fallback for candidates with no listed entries.
pub const EXPERIENCE_FALLBACK: &str = "I'm at the start of my professional journey, but I'm a \
    fast learner and highly motivated to grow into the {title} role.";

/// Skills answer — fill `{skills}` and `{company}`.
pub const SKILLS_TEMPLATE: &str = "My core skills include {skills}. I'm confident they map \
    directly onto what {company} is looking for.";

/// Skills fallback for candidates with no listed skills.
pub const SKILLS_FALLBACK: &str = "I focus on learning quickly and adapting to the tools a team \
    already uses, so I'm confident I can get up to speed fast.";

/// Salary answer — fill `{min}` and `{max}` with formatted figures.
pub const SALARY_TEMPLATE: &str = "Based on my experience and market research, I'm looking for a \
    range of {min} to {max}, though I'm open to discussing the complete compensation package.";

/// Salary fallback when no expectation is stated.
pub const SALARY_FALLBACK: &str = "I'm flexible on compensation and more interested in the \
    overall fit. I'd be happy to discuss a package that's fair for this role.";

/// Why-interested answer — fill `{title}` and `{company}`.
pub const WHY_INTERESTED_TEMPLATE: &str = "The {title} position at {company} aligns closely with \
    my background and with where I want to grow next. It looks like a strong mutual fit.";

/// Generic answer — fill `{title}`.
pub const GENERIC_TEMPLATE: &str = "That's a great question. Regarding the {title} position, I \
    believe my background makes me a strong candidate, and I'd be glad to go into more detail.";

pub const WEAKNESS_POOL: &[&str] = &[
    "I sometimes focus too much on details, but I've been learning to balance thoroughness with delivery speed.",
    "Public speaking used to challenge me, so I've been volunteering to present more often to improve.",
    "I used to hesitate to delegate, but I've learned that trusting teammates produces better outcomes.",
];

pub const STRENGTH_POOL: &[&str] = &[
    "My biggest strength is breaking down complex problems into clear, workable steps.",
    "I excel at staying calm under pressure and keeping a team focused on what matters.",
    "I'm known for following through: when I commit to something, it gets finished.",
    "I pick up new tools and domains quickly, which keeps my ramp-up time short.",
];

pub const TEAMWORK_POOL: &[&str] = &[
    "I work best in teams with open communication, and I make a point of keeping everyone in the loop.",
    "I enjoy pairing and code review as ways to share context, and I'm comfortable both giving and receiving feedback.",
    "In past teams I've often been the person who bridges between technical and non-technical colleagues.",
];

pub const PROJECT_POOL: &[&str] = &[
    "One project I'm proud of involved rescuing a delayed delivery by re-scoping it with the stakeholders and shipping the core in half the time.",
    "I recently led a small effort to automate a manual workflow, which saved the team several hours every week.",
    "My favorite project taught me the value of early user feedback: we changed direction twice and ended up with something people actually used.",
];

pub const AVAILABILITY_POOL: &[&str] = &[
    "I could start within two weeks of an offer, and I'm happy to coordinate the exact date.",
    "My notice period is short, so I'm available to start quite soon.",
    "I'm flexible on the start date and can work around your onboarding schedule.",
];

pub const CANDIDATE_QUESTION_POOL: &[&str] = &[
    "Yes — I'd love to hear how success in this role is measured over the first year.",
    "I do: what does a typical week look like for the team I'd be joining?",
    "I'm curious what you personally enjoy most about working here.",
    "Could you tell me more about the team's current priorities and biggest challenges?",
];
