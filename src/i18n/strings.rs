//! Localized UI strings for every page of the site.
//!
//! Strings may contain inline HTML (`<br/>`) and are rendered as-is by the
//! page templates. Count-dependent strings are plain functions so that each
//! locale keeps its own plural rule.

use crate::i18n::LocaleRegistry;

/// All localized UI strings for a locale
#[derive(Debug, Clone)]
pub struct Translations {
    pub nav: NavStrings,
    pub home: HomeStrings,
    pub projects: ProjectsStrings,
    pub parcours: ParcoursStrings,
    pub project_detail: ProjectDetailStrings,
    pub common: CommonStrings,
    pub meta: MetaStrings,
}

#[derive(Debug, Clone)]
pub struct NavStrings {
    pub home: &'static str,
    pub projects: &'static str,
    pub parcours: &'static str,
}

#[derive(Debug, Clone)]
pub struct HomeStrings {
    pub hero: TitledText,
    pub stats: StatsStrings,
    pub cta: CtaStrings,
    pub expertise: ExpertiseStrings,
    pub tech_stack: Label,
    pub contact: ContactStrings,
}

/// A heading with its supporting line
#[derive(Debug, Clone)]
pub struct TitledText {
    pub title: &'static str,
    pub subtitle: &'static str,
}

#[derive(Debug, Clone)]
pub struct StatsStrings {
    pub users: &'static str,
    pub messages: &'static str,
    pub users_desc: &'static str,
    pub messages_desc: &'static str,
}

#[derive(Debug, Clone)]
pub struct CtaStrings {
    pub projects: &'static str,
    pub parcours: &'static str,
}

#[derive(Debug, Clone)]
pub struct ExpertiseStrings {
    pub title: &'static str,
    pub perf: ExpertiseArea,
    pub ai: ExpertiseArea,
    pub backend: ExpertiseArea,
    pub database: ExpertiseArea,
}

#[derive(Debug, Clone)]
pub struct ExpertiseArea {
    pub title: &'static str,
    pub desc: &'static str,
}

/// A lone caption
#[derive(Debug, Clone)]
pub struct Label {
    pub label: &'static str,
}

#[derive(Debug, Clone)]
pub struct ContactStrings {
    pub title: &'static str,
    pub intro: &'static str,
    pub email: EmailContact,
    pub github: Label,
    pub linkedin: Label,
    pub cv: CvContact,
}

#[derive(Debug, Clone)]
pub struct EmailContact {
    pub label: &'static str,
    /// Tooltip on the copy-to-clipboard button
    pub hint: &'static str,
}

#[derive(Debug, Clone)]
pub struct CvContact {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone)]
pub struct ProjectsStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub professional: SectionStrings,
    pub personal: SectionStrings,
    pub view_details: &'static str,
    /// Project counter shown above the project grid
    pub count: fn(usize) -> String,
}

#[derive(Debug, Clone)]
pub struct SectionStrings {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone)]
pub struct ParcoursStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub experiences_title: &'static str,
    pub education_title: &'static str,
    /// Shown in place of a missing end date
    pub present: &'static str,
}

#[derive(Debug, Clone)]
pub struct ProjectDetailStrings {
    pub technologies: &'static str,
    pub demo: &'static str,
    pub github: &'static str,
    pub npm: &'static str,
}

#[derive(Debug, Clone)]
pub struct CommonStrings {
    pub back: &'static str,
    pub click_to_copy: &'static str,
    pub copied: &'static str,
}

#[derive(Debug, Clone)]
pub struct MetaStrings {
    pub job_title: &'static str,
}

/// Get the dictionary for a locale code, falling back to the default locale.
pub fn translate(code: &str) -> &'static Translations {
    LocaleRegistry::get().get_or_default(code).translations
}

// ==================== Plural Rules ====================

/// French: singular for 0 and 1.
fn french_project_count(n: usize) -> String {
    format!("💼 {} projet{}", n, if n > 1 { "s" } else { "" })
}

/// English: singular for exactly 1.
fn english_project_count(n: usize) -> String {
    format!("💼 {} project{}", n, if n != 1 { "s" } else { "" })
}

// ==================== French Strings ====================

pub static FRENCH_TRANSLATIONS: Translations = Translations {
    nav: NavStrings {
        home: "Home",
        projects: "Projets",
        parcours: "Parcours",
    },
    home: HomeStrings {
        hero: TitledText {
            title: "Salut, je suis Mehdi.<br/>Software engineer passionné",
            subtitle: "Ingénieur logiciel spécialisé en développement backend.<br>\
Passionné par les défis techniques complexes, algorithmie et l'optimisation de systèmes à haute performance.",
        },
        stats: StatsStrings {
            users: "Utilisateurs",
            messages: "Messages",
            users_desc: "Traitement temps réel concurrent (chatbot)",
            messages_desc: "Base de données NoSql optimisée (chatbot)",
        },
        cta: CtaStrings {
            projects: "Projets",
            parcours: "Parcours",
        },
        expertise: ExpertiseStrings {
            title: "Domaines d'expertise",
            perf: ExpertiseArea {
                title: "Performance & Optimisation",
                desc: "Architecture asynchrone, multi-threading, optimisation de latence et throughput",
            },
            ai: ExpertiseArea {
                title: "IA/ML Avancé",
                desc: "RAG avancé (fusion, multi-query), agents autonomes, orchestration LLM multi-modèles",
            },
            backend: ExpertiseArea {
                title: "Architecture Backend",
                desc: "APIs robustes, pipelines de traitement complexes, ingénierie logicielle avancée",
            },
            database: ExpertiseArea {
                title: "Optimisation Databases",
                desc: "Requêtes avancées, indexation, recherche vectorielle, modélisation de données",
            },
        },
        tech_stack: Label { label: "Stack technique" },
        contact: ContactStrings {
            title: "Contact",
            intro: "Intéressé par une collaboration ou un échange technique ? N'hésitez pas à me contacter.",
            email: EmailContact {
                label: "Email",
                hint: "Cliquer pour copier",
            },
            github: Label { label: "GitHub" },
            linkedin: Label { label: "LinkedIn" },
            cv: CvContact {
                label: "CV",
                value: "Télécharger mon CV",
            },
        },
    },
    projects: ProjectsStrings {
        title: "Mes Projets",
        subtitle: "Une sélection de projets techniques démontrant mon expertise en développement logiciel, performance et architecture.",
        professional: SectionStrings {
            title: "Projets Professionnels",
            description: "Projets réalisés dans un contexte professionnel, démontrant mon expertise technique et ma capacité à livrer des solutions robustes.",
        },
        personal: SectionStrings {
            title: "Projets Personnels",
            description: "Projets personnels explorant de nouvelles technologies et concepts, avec un focus sur la performance et l'innovation.",
        },
        view_details: "Voir détails →",
        count: french_project_count,
    },
    parcours: ParcoursStrings {
        title: "Mon Parcours",
        subtitle: "Mon évolution professionnelle et académique, marquée par des projets techniques challengeants et une expertise croissante en développement logiciel.",
        experiences_title: "Expériences professionnelles",
        education_title: "Formation",
        present: "Aujourd'hui",
    },
    project_detail: ProjectDetailStrings {
        technologies: "Technologies & tools",
        demo: "Démo en ligne",
        github: "Code source",
        npm: "NPM Package",
    },
    common: CommonStrings {
        back: "Retour",
        click_to_copy: "Cliquer pour copier",
        copied: "✓ Copié !",
    },
    meta: MetaStrings {
        job_title: "Software Engineer",
    },
};

// ==================== English Strings ====================

pub static ENGLISH_TRANSLATIONS: Translations = Translations {
    nav: NavStrings {
        home: "Home",
        projects: "Projects",
        parcours: "Career",
    },
    home: HomeStrings {
        hero: TitledText {
            title: "Hi, I'm Mehdi.<br/>Passionate software engineer",
            subtitle: "Software engineer specialized in backend development.<br>\
Passionate about complex technical challenges, algorithms and high-performance systems optimization.",
        },
        stats: StatsStrings {
            users: "Users",
            messages: "Messages",
            users_desc: "Concurrent real-time processing (chatbot)",
            messages_desc: "Optimized NoSQL database (chatbot)",
        },
        cta: CtaStrings {
            projects: "Projects",
            parcours: "Career",
        },
        expertise: ExpertiseStrings {
            title: "Areas of expertise",
            perf: ExpertiseArea {
                title: "Performance & Optimization",
                desc: "Asynchronous architecture, multi-threading, latency and throughput optimization",
            },
            ai: ExpertiseArea {
                title: "Advanced AI/ML",
                desc: "Advanced RAG (fusion, multi-query), autonomous agents, multi-model LLM orchestration",
            },
            backend: ExpertiseArea {
                title: "Backend Architecture",
                desc: "Robust APIs, complex processing pipelines, advanced software engineering",
            },
            database: ExpertiseArea {
                title: "Database Optimization",
                desc: "Advanced queries, indexing, vector search, data modeling",
            },
        },
        tech_stack: Label { label: "Tech stack" },
        contact: ContactStrings {
            title: "Contact",
            intro: "Interested in collaboration or technical discussion? Feel free to reach out.",
            email: EmailContact {
                label: "Email",
                hint: "Click to copy",
            },
            github: Label { label: "GitHub" },
            linkedin: Label { label: "LinkedIn" },
            cv: CvContact {
                label: "Resume",
                value: "Download my resume",
            },
        },
    },
    projects: ProjectsStrings {
        title: "My Projects",
        subtitle: "A selection of technical projects demonstrating my expertise in software development, performance and architecture.",
        professional: SectionStrings {
            title: "Professional Projects",
            description: "Projects completed in a professional context, demonstrating my technical expertise and ability to deliver robust solutions.",
        },
        personal: SectionStrings {
            title: "Personal Projects",
            description: "Personal projects exploring new technologies and concepts, with a focus on performance and innovation.",
        },
        view_details: "View details →",
        count: english_project_count,
    },
    parcours: ParcoursStrings {
        title: "My Career",
        subtitle: "My professional and academic evolution, marked by challenging technical projects and growing expertise in software development.",
        experiences_title: "Professional experience",
        education_title: "Education",
        present: "Present",
    },
    project_detail: ProjectDetailStrings {
        technologies: "Technologies & tools",
        demo: "Live demo",
        github: "Source code",
        npm: "NPM Package",
    },
    common: CommonStrings {
        back: "Back",
        click_to_copy: "Click to copy",
        copied: "✓ Copied!",
    },
    meta: MetaStrings {
        job_title: "Software Engineer",
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== translate Tests ====================

    #[test]
    fn test_translate_french() {
        let t = translate("fr");
        assert_eq!(t.nav.projects, "Projets");
        assert_eq!(t.parcours.present, "Aujourd'hui");
    }

    #[test]
    fn test_translate_english() {
        let t = translate("en");
        assert_eq!(t.nav.projects, "Projects");
        assert_eq!(t.parcours.present, "Present");
    }

    #[test]
    fn test_translate_unknown_falls_back_to_french() {
        assert!(std::ptr::eq(translate("de"), translate("fr")));
        assert!(std::ptr::eq(translate(""), translate("fr")));
    }

    // ==================== Plural Rule Tests ====================

    #[test]
    fn test_french_count() {
        let count = translate("fr").projects.count;
        assert_eq!(count(0), "💼 0 projet");
        assert_eq!(count(1), "💼 1 projet");
        assert_eq!(count(2), "💼 2 projets");
        assert_eq!(count(12), "💼 12 projets");
    }

    #[test]
    fn test_english_count() {
        let count = translate("en").projects.count;
        assert_eq!(count(0), "💼 0 projects");
        assert_eq!(count(1), "💼 1 project");
        assert_eq!(count(2), "💼 2 projects");
    }

    #[test]
    fn test_plural_rules_differ_at_zero() {
        assert_ne!(
            (FRENCH_TRANSLATIONS.projects.count)(0).ends_with('s'),
            (ENGLISH_TRANSLATIONS.projects.count)(0).ends_with('s')
        );
    }

    // ==================== Content Tests ====================

    #[test]
    fn test_hero_titles_keep_line_break_markup() {
        assert!(FRENCH_TRANSLATIONS.home.hero.title.contains("<br/>"));
        assert!(ENGLISH_TRANSLATIONS.home.hero.title.contains("<br/>"));
    }

    #[test]
    fn test_contact_labels_differ_per_locale() {
        assert_eq!(FRENCH_TRANSLATIONS.home.contact.cv.label, "CV");
        assert_eq!(ENGLISH_TRANSLATIONS.home.contact.cv.label, "Resume");
    }

    #[test]
    fn test_contact_and_tech_stack_are_nested() {
        let fr = &FRENCH_TRANSLATIONS.home;
        assert_eq!(fr.tech_stack.label, "Stack technique");
        assert_eq!(fr.contact.email.label, "Email");
        assert_eq!(fr.contact.email.hint, "Cliquer pour copier");
        assert_eq!(fr.contact.github.label, "GitHub");
        assert_eq!(fr.contact.linkedin.label, "LinkedIn");
        assert_eq!(fr.contact.cv.value, "Télécharger mon CV");

        let en = &ENGLISH_TRANSLATIONS.home;
        assert_eq!(en.tech_stack.label, "Tech stack");
        assert_eq!(en.contact.email.hint, "Click to copy");
        assert_eq!(en.contact.cv.value, "Download my resume");
    }

    #[test]
    fn test_no_empty_section_titles() {
        for t in [&FRENCH_TRANSLATIONS, &ENGLISH_TRANSLATIONS] {
            assert!(!t.projects.title.is_empty());
            assert!(!t.parcours.title.is_empty());
            assert!(!t.home.expertise.title.is_empty());
            assert!(!t.meta.job_title.is_empty());
        }
    }
}
