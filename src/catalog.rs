//! Static metric, unit and caption tables.

/// A chartable metric and the units it may be reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricDef {
    pub metric: &'static str,
    pub units: &'static [&'static str],
}

impl MetricDef {
    const fn new(metric: &'static str, units: &'static [&'static str]) -> Self {
        MetricDef { metric, units }
    }
}

/// Which of the two metric tables a seed draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricCategory {
    Devops,
    Absurd,
}

impl MetricCategory {
    /// Seeds starting with a-m (any case) are devops metrics, everything
    /// else, including the empty seed, is absurd.
    pub fn for_seed(seed: &str) -> Self {
        match seed.chars().next().map(|c| c.to_ascii_lowercase()) {
            Some('a'..='m') => MetricCategory::Devops,
            _ => MetricCategory::Absurd,
        }
    }

    pub fn table(self) -> &'static [MetricDef] {
        match self {
            MetricCategory::Devops => DEVOPS_METRICS,
            MetricCategory::Absurd => ABSURD_METRICS,
        }
    }

    /// Devops metrics plot as series A, absurd ones as series B.
    pub fn is_primary(self) -> bool {
        self == MetricCategory::Devops
    }

    pub fn name(self) -> &'static str {
        match self {
            MetricCategory::Devops => "devops",
            MetricCategory::Absurd => "absurd",
        }
    }

    /// The metric paired under `metric_pair_index`.
    pub fn metric(self, metric_pair_index: u32) -> &'static MetricDef {
        let table = self.table();
        &table[metric_pair_index as usize % table.len()]
    }
}

/// Caption chosen by `caption_index`, with its position in [`CAPTIONS`].
pub fn caption(caption_index: u32) -> (usize, &'static str) {
    let index = caption_index as usize % CAPTIONS.len();
    (index, CAPTIONS[index])
}

pub static DEVOPS_METRICS: &[MetricDef] = &[
    MetricDef::new("Kubernetes pod restart frequency", &["per hour", "per day", "restarts"]),
    MetricDef::new("Redis cache hit rate", &["%", "hits/requests"]),
    MetricDef::new("Database connection pool utilization", &["%", "connections/pool"]),
    MetricDef::new("API response time (95th percentile)", &["ms", "s"]),
    MetricDef::new("Docker image build duration", &["minutes", "seconds", "s"]),
    MetricDef::new("Prometheus alert firing rate", &["per hour", "per day", "alerts"]),
    MetricDef::new("Git commit frequency", &["per day", "per hour", "commits"]),
    MetricDef::new("CI/CD pipeline success rate", &["%", "successful/total"]),
    MetricDef::new("Memory leak detection events", &["events", "per day", "detections"]),
    MetricDef::new("Load balancer request distribution", &["req/s", "requests/min", "%"]),
    MetricDef::new("Service mesh latency", &["ms", "μs", "s"]),
    MetricDef::new("Elasticsearch cluster health score", &["score", "points", "%"]),
    MetricDef::new("CDN cache invalidation frequency", &["per hour", "per day", "invalidations"]),
    MetricDef::new("Microservice dependency graph complexity", &["score", "points", "connections"]),
    MetricDef::new("Container resource limit breaches", &["breaches", "per day", "events"]),
    MetricDef::new("Database query optimization ratio", &["%", "optimized/total"]),
    MetricDef::new("SSL certificate expiration warnings", &["warnings", "per day", "alerts"]),
    MetricDef::new("Backup verification success rate", &["%", "successful/total"]),
    MetricDef::new("Log aggregation processing delay", &["ms", "s", "minutes"]),
    MetricDef::new("Auto-scaling trigger frequency", &["per hour", "per day", "triggers"]),
    MetricDef::new("Network packet loss percentage", &["%", "lost/total"]),
    MetricDef::new("Service discovery health checks", &["per minute", "per hour", "checks"]),
    MetricDef::new("Database index fragmentation level", &["%", "fragmented/total"]),
    MetricDef::new("API gateway throttling incidents", &["incidents", "per day", "events"]),
    MetricDef::new("Container orchestration overhead", &["%", "ms", "overhead/total"]),
    MetricDef::new("Distributed tracing span count", &["spans", "per request", "per trace"]),
    MetricDef::new("Message queue processing throughput", &["msg/s", "messages/min", "per hour"]),
    MetricDef::new("Infrastructure provisioning time", &["minutes", "seconds", "s"]),
    MetricDef::new("Security vulnerability scan results", &["vulnerabilities", "per day", "findings"]),
    MetricDef::new("Database replication lag", &["ms", "s", "minutes"]),
    MetricDef::new("Load testing failure scenarios", &["scenarios", "per test", "failures"]),
    MetricDef::new("Chaos engineering blast radius", &["services", "components", "affected"]),
    MetricDef::new("Observability dashboard refresh rate", &["per minute", "Hz", "updates/s"]),
    MetricDef::new("Resource utilization anomaly detection", &["anomalies", "per hour", "detections"]),
    MetricDef::new("Service level indicator violations", &["violations", "per day", "breaches"]),
];

pub static ABSURD_METRICS: &[MetricDef] = &[
    MetricDef::new("Engineers wearing Crocs to work", &["people", "engineers", "individuals"]),
    MetricDef::new("Coffee shop visits per developer", &["visits/day", "per week", "visits"]),
    MetricDef::new("Rubber duck debugging sessions", &["sessions", "per day", "interactions"]),
    MetricDef::new("Number of houseplants in the office", &["plants", "items", "specimens"]),
    MetricDef::new("Slack emoji reactions per day", &["reactions", "per hour", "emojis"]),
    MetricDef::new("Standing desk usage duration", &["hours", "minutes", "per day"]),
    MetricDef::new("Mechanical keyboard click frequency", &["clicks/min", "per hour", "keystrokes"]),
    MetricDef::new("Open browser tabs per engineer", &["tabs", "per person", "windows"]),
    MetricDef::new("Hoodie-wearing developers count", &["people", "developers", "individuals"]),
    MetricDef::new("Ping pong tournament participation", &["participants", "people", "players"]),
    MetricDef::new("Spotify playlist shuffles during work", &["shuffles", "per day", "changes"]),
    MetricDef::new("Energy drink consumption volume", &["cans", "liters", "ml"]),
    MetricDef::new("Nerf gun office battles", &["battles", "per week", "skirmishes"]),
    MetricDef::new("Sourdough starter maintenance logs", &["entries", "per day", "updates"]),
    MetricDef::new("Cat videos watched during builds", &["videos", "per build", "views"]),
    MetricDef::new("Meditation app session completions", &["sessions", "per day", "completions"]),
    MetricDef::new("Avocado toast consumption rate", &["slices", "per day", "servings"]),
    MetricDef::new("Fidget spinner usage frequency", &["spins/min", "per hour", "uses"]),
    MetricDef::new("Beanbag chair occupancy time", &["hours", "minutes", "per day"]),
    MetricDef::new("Succulent plant watering reminders", &["reminders", "per week", "notifications"]),
    MetricDef::new("Developers with beard grooming kits", &["people", "developers", "individuals"]),
    MetricDef::new("Artisanal coffee brewing attempts", &["attempts", "per day", "brews"]),
    MetricDef::new("Yoga mat storage violations", &["violations", "per week", "infractions"]),
    MetricDef::new("Noise-canceling headphone battery life", &["hours", "minutes", "per charge"]),
    MetricDef::new("Ergonomic mouse pad replacements", &["replacements", "per month", "swaps"]),
    MetricDef::new("Blue light blocking glasses adoption", &["people", "developers", "%"]),
    MetricDef::new("Kombucha fermentation experiments", &["experiments", "per month", "batches"]),
    MetricDef::new("Desk lamp brightness adjustments", &["adjustments", "per day", "changes"]),
    MetricDef::new("Pomodoro timer completion rate", &["%", "completed/started", "per day"]),
    MetricDef::new("Whiteboard marker ink depletion", &["markers", "per week", "depleted"]),
    MetricDef::new("Stress ball squeeze frequency", &["squeezes/min", "per hour", "uses"]),
    MetricDef::new("Foam roller usage in break rooms", &["sessions", "per day", "uses"]),
    MetricDef::new("Cryptocurrency price check count", &["checks", "per day", "lookups"]),
    MetricDef::new("Meme sharing velocity", &["memes/hour", "per day", "shares"]),
    MetricDef::new("Procrastination via social media", &["minutes", "per day", "hours"]),
    MetricDef::new("Snack cupboard raiding incidents", &["incidents", "per day", "raids"]),
    MetricDef::new("Ambient office temperature complaints", &["complaints", "per day", "reports"]),
    MetricDef::new("Bluetooth speaker pairing failures", &["failures", "per day", "attempts"]),
    MetricDef::new("Shoe untying incidents per day", &["incidents", "mishaps", "occurrences"]),
    MetricDef::new("Developers eating lunch at their desk", &["people", "developers", "individuals"]),
];

pub static CAPTIONS: &[&str] = &[
    "Everything graphs together if you squint hard enough.",
    "Correlation does not imply causation, but it does imply clickbait.",
    "Scientists hate this one weird correlation trick!",
    "Breaking: Local data proves that statistics can prove anything.",
    "Remember: 73% of statistics are made up on the spot.",
    "This chart was sponsored by the Department of Spurious Relationships.",
    "Warning: May cause excessive confidence in data interpretation.",
    "Certified by the Institute of Questionable Analytics.",
    "Results may vary. Side effects include false conclusions.",
    "Perfect correlation achieved through careful data massage.",
    "Your data scientist will hate this simple graphing trick.",
    "Evidence suggests that graphs can be very persuasive.",
    "Causation is just correlation with better marketing.",
    "This correlation brought to you by selective data filtering.",
    "Remember: If it trends together, it must be connected... right?",
    "Advisory: This chart may cause spontaneous PowerPoint presentations.",
    "Proof that any two things can be mathematically related.",
    "Disclaimer: No actual insights were harmed in making this chart.",
    "The universe is basically just one big correlation engine.",
    "This correlation is definitely not a coincidence. Trust us.",
    "Mathematics: Making the impossible seem inevitable since forever.",
    "Your confirmation bias is showing, but that's okay.",
    "Results guaranteed to be statistically significant (p < 0.05).",
    "This graph contains 0% actual causation, 100% pure speculation.",
    "Brought to you by the Committee for Misleading Data Visualization.",
];

/// Adjectives for the first seed; all start with a-m, so they pick devops metrics.
pub static ADJECTIVES_A_M: &[&str] = &[
    "agile", "amber", "bouncy", "brave", "breezy", "bright", "calm", "cheeky", "clever",
    "cosmic", "crispy", "curious", "dapper", "dizzy", "eager", "electric", "fancy", "fearless",
    "fluffy", "frosty", "fuzzy", "gentle", "giddy", "glossy", "grumpy", "happy", "hasty",
    "humble", "icy", "jolly", "jumpy", "kind", "lanky", "lively", "lucky", "merry", "mellow",
    "mighty", "misty",
];

/// Adjectives for the second seed; all start with n-z, so they pick absurd metrics.
pub static ADJECTIVES_N_Z: &[&str] = &[
    "nimble", "noisy", "nutty", "odd", "orange", "peppy", "perky", "plucky", "polite", "quick",
    "quiet", "quirky", "rapid", "rusty", "salty", "sassy", "shiny", "sleepy", "snappy", "spicy",
    "sturdy", "sunny", "tangy", "tidy", "tiny", "upbeat", "vivid", "velvet", "wacky", "wobbly",
    "witty", "yellow", "youthful", "zany", "zealous", "zesty",
];

/// Nouns used as correlation ids.
pub static NOUNS: &[&str] = &[
    "anchor", "avocado", "badger", "banana", "biscuit", "cactus", "coffee", "compass", "donut",
    "dragon", "falcon", "feather", "garden", "giraffe", "hammock", "harbor", "igloo", "jelly",
    "kettle", "koala", "lantern", "lighthouse", "llama", "mango", "meadow", "noodle", "octopus",
    "otter", "pancake", "penguin", "pickle", "quokka", "rocket", "saddle", "sandwich", "teapot",
    "toaster", "tulip", "umbrella", "unicorn", "volcano", "waffle", "walrus", "yak", "yogurt",
    "zeppelin",
];
