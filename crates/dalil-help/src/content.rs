//! Content blocks and the registry hosts fill them from

use std::collections::HashMap;
use std::fmt;

use chrono::Local;
use serde::{Deserialize, Serialize};

/// An opaque unit of help content selected by the navigator.
///
/// The navigator only decides which block is shown; what a block contains is
/// supplied through a [`ContentRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentBlock {
    About,
    Contact,
    Faq,
    Chat,
    UserGuide,
    AdminGuide,
    VideoTutorials,
    TechnicalSpecification,
    ApiDocumentation,
    DeploymentGuide,
}

impl ContentBlock {
    pub fn as_str(self) -> &'static str {
        match self {
            ContentBlock::About => "about",
            ContentBlock::Contact => "contact",
            ContentBlock::Faq => "faq",
            ContentBlock::Chat => "chat",
            ContentBlock::UserGuide => "user-guide",
            ContentBlock::AdminGuide => "admin-guide",
            ContentBlock::VideoTutorials => "video-tutorials",
            ContentBlock::TechnicalSpecification => "technical-specification",
            ContentBlock::ApiDocumentation => "api-documentation",
            ContentBlock::DeploymentGuide => "deployment-guide",
        }
    }
}

impl fmt::Display for ContentBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A heading with its body text
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentEntry {
    pub heading: String,
    pub body: String,
}

impl ContentEntry {
    pub fn new(heading: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            body: body.into(),
        }
    }
}

/// Displayable content of one block
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BlockContent {
    pub title: String,
    pub description: String,
    pub entries: Vec<ContentEntry>,
}

impl BlockContent {
    /// Create a new block with a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            entries: Vec::new(),
        }
    }

    /// Set block description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Add an entry to this block
    pub fn add_entry(mut self, heading: impl Into<String>, body: impl Into<String>) -> Self {
        self.entries.push(ContentEntry::new(heading, body));
        self
    }

    /// Flatten into display lines: description, then each entry
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if !self.description.is_empty() {
            lines.push(self.description.clone());
            lines.push(String::new());
        }
        for entry in &self.entries {
            lines.push(entry.heading.clone());
            lines.extend(entry.body.lines().map(|line| format!("  {}", line)));
            lines.push(String::new());
        }
        lines
    }
}

/// Content supplied by the host for each block
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentRegistry {
    blocks: HashMap<ContentBlock, BlockContent>,
}

impl ContentRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register content for a block, replacing any previous content
    pub fn with_block(mut self, block: ContentBlock, content: BlockContent) -> Self {
        self.blocks.insert(block, content);
        self
    }

    pub fn get(&self, block: ContentBlock) -> Option<&BlockContent> {
        self.blocks.get(&block)
    }

    pub fn contains(&self, block: ContentBlock) -> bool {
        self.blocks.contains_key(&block)
    }

    /// Statically authored content of the Dalil.dz help pages.
    ///
    /// Only the blocks written inline with the help pages are present; the
    /// guides, video tutorials, API documentation and technical specification
    /// come from their own modules and must be registered by the host.
    pub fn dalil_defaults() -> Self {
        Self::new()
            .with_block(
                ContentBlock::About,
                BlockContent::new("À propos de Dalil.dz")
                    .with_description(
                        "Dalil.dz est la plateforme nationale de veille juridique et réglementaire de l'Algérie. \
                         Elle offre un accès centralisé aux textes juridiques, procédures administratives et ressources juridiques du pays.",
                    )
                    .add_entry(
                        "Notre mission",
                        "Faciliter l'accès à l'information juridique pour tous les professionnels du droit, les institutions et les citoyens.",
                    )
                    .add_entry(
                        "Statistiques de la plateforme",
                        "Textes juridiques: 2,847\nProcédures: 1,234\nUtilisateurs actifs: 15,672\nTaux de satisfaction: 98.7%",
                    )
                    .add_entry(
                        "Notre équipe",
                        "Une équipe de juristes, développeurs et experts en digitalisation travaille quotidiennement pour améliorer vos services.\n\
                         25+ experts juridiques\n15+ développeurs\nSupport 24h/7j",
                    )
                    .add_entry(
                        "Partenaires institutionnels",
                        "Ministère de la Justice\nConseil d'État\nCour Suprême\nMinistère de l'Intérieur\nOrdre des Avocats\nChambre Notariale",
                    )
                    .add_entry(
                        "Version et mise à jour",
                        format!(
                            "Version actuelle: v2.3.1\nDernière mise à jour: {}\nProchaine version: v2.4.0 - Q2 2024",
                            Local::now().format("%d/%m/%Y")
                        ),
                    ),
            )
            .with_block(
                ContentBlock::Contact,
                BlockContent::new("Contact")
                    .add_entry("Email", "contact@dalil.dz\nsupport@dalil.dz\ninfo@dalil.dz")
                    .add_entry("Téléphone", "+213 21 XX XX XX\nNuméro vert: 3020\nLun-Ven: 8h-17h")
                    .add_entry(
                        "Localisation",
                        "Adresse: Ministère de la Justice, Alger, Algérie\nGPS: 36.7528° N, 3.0420° E",
                    )
                    .add_entry(
                        "Réseaux sociaux",
                        "Facebook: @DalilDZ\nLinkedIn: Dalil.dz\nTwitter: @dalil_dz",
                    )
                    .add_entry(
                        "Horaires d'ouverture",
                        "Lundi - Jeudi: 8h00 - 16h30\nVendredi: 8h00 - 12h00\nSupport en ligne 24h/7j",
                    ),
            )
            .with_block(
                ContentBlock::Faq,
                BlockContent::new("Questions fréquemment posées")
                    // search field, not wired to any matching
                    .add_entry("Rechercher une question...", "")
                    .add_entry(
                        "Comment rechercher un texte juridique ?",
                        "Utilisez la barre de recherche principale ou accédez au catalogue des textes juridiques pour une recherche avancée.",
                    )
                    .add_entry(
                        "Comment créer un compte ?",
                        "Cliquez sur \"Créer un compte\" et suivez les instructions. L'inscription est gratuite pour tous les utilisateurs.",
                    ),
            )
            .with_block(
                ContentBlock::Chat,
                BlockContent::new("Support en ligne")
                    .with_description("Notre équipe de support est disponible pour vous aider.")
                    .add_entry("Démarrer une conversation", ""),
            )
            .with_block(
                ContentBlock::DeploymentGuide,
                BlockContent::new("Guide de Déploiement")
                    .with_description("Instructions pour déployer et configurer l'application")
                    .add_entry(
                        "Prérequis système",
                        "Node.js 18+ et npm/yarn\nBase de données PostgreSQL 14+\nServeur web (Nginx/Apache)\nSSL/TLS configuré",
                    )
                    .add_entry(
                        "Étapes de déploiement",
                        "1. Cloner le repository et installer les dépendances\n\
                         2. Configurer les variables d'environnement\n\
                         3. Initialiser la base de données\n\
                         4. Compiler l'application (build production)\n\
                         5. Configurer le serveur web et les certificats",
                    ),
            )
    }
}
