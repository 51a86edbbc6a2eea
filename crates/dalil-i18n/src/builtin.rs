//! Built-in catalog for the help pages

use once_cell::sync::Lazy;

use crate::{LanguageCode, TranslationCatalog, TranslationKey};

use TranslationKey::*;

const FR: [(TranslationKey, &str); 17] = [
    (AboutTitle, "À propos"),
    (AboutDesc, "Informations sur Dalil.dz"),
    (ContactTitle, "Contact"),
    (ContactDesc, "Nous contacter"),
    (SupportTitle, "Support technique"),
    (SupportDesc, "Assistance et support"),
    (Faq, "FAQ"),
    (ChatSupport, "Chat Support"),
    (HelpCenter, "Centre d'aide"),
    (TechnicalSpec, "Fiche technique"),
    (UserGuide, "Guide utilisateur"),
    (AdminGuide, "Guide administrateur"),
    (ApiDoc, "Documentation API"),
    (VideoTutorials, "Tutoriels vidéo"),
    (TechnicalDoc, "Documentation Technique"),
    (Deployment, "Déploiement"),
    (SectionNotFound, "Section non trouvée"),
];

const AR: [(TranslationKey, &str); 17] = [
    (AboutTitle, "حول"),
    (AboutDesc, "معلومات حول Dalil.dz"),
    (ContactTitle, "اتصل بنا"),
    (ContactDesc, "تواصل معنا"),
    (SupportTitle, "الدعم الفني"),
    (SupportDesc, "المساعدة والدعم"),
    (Faq, "الأسئلة الشائعة"),
    (ChatSupport, "دعم المحادثة"),
    (HelpCenter, "مركز المساعدة"),
    (TechnicalSpec, "المواصفات الفنية"),
    (UserGuide, "دليل المستخدم"),
    (AdminGuide, "دليل المدير"),
    (ApiDoc, "وثائق API"),
    (VideoTutorials, "دروس الفيديو"),
    (TechnicalDoc, "الوثائق التقنية"),
    (Deployment, "النشر"),
    (SectionNotFound, "القسم غير موجود"),
];

const EN: [(TranslationKey, &str); 17] = [
    (AboutTitle, "About"),
    (AboutDesc, "Information about Dalil.dz"),
    (ContactTitle, "Contact"),
    (ContactDesc, "Contact us"),
    (SupportTitle, "Technical Support"),
    (SupportDesc, "Assistance and support"),
    (Faq, "FAQ"),
    (ChatSupport, "Chat Support"),
    (HelpCenter, "Help Center"),
    (TechnicalSpec, "Technical Specification"),
    (UserGuide, "User Guide"),
    (AdminGuide, "Admin Guide"),
    (ApiDoc, "API Documentation"),
    (VideoTutorials, "Video Tutorials"),
    (TechnicalDoc, "Technical Documentation"),
    (Deployment, "Deployment"),
    (SectionNotFound, "Section not found"),
];

pub(crate) static BUILTIN_CATALOG: Lazy<TranslationCatalog> = Lazy::new(|| {
    TranslationCatalog::builder()
        .table(LanguageCode::Fr, FR)
        .table(LanguageCode::Ar, AR)
        .table(LanguageCode::En, EN)
        .build()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_is_complete() {
        let catalog = TranslationCatalog::builtin();
        for language in LanguageCode::ALL {
            assert!(
                catalog.missing_keys(language).is_empty(),
                "{} is missing {:?}",
                language,
                catalog.missing_keys(language)
            );
        }
        assert_eq!(catalog.len(), LanguageCode::ALL.len() * TranslationKey::ALL.len());
    }

    #[test]
    fn test_every_language_has_a_table() {
        assert_eq!(TranslationCatalog::builtin().languages(), LanguageCode::ALL.to_vec());
    }
}
