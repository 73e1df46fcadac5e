use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::models::RoiModel;
use crate::services::format::{format_currency, format_plan_price, CurrencyFormat, PlanPeriod};
use crate::services::whatsapp;

#[derive(Debug, Clone, Serialize)]
pub struct SiteConfig {
    pub name: String,
    pub url: String,
    pub locale: String,
    pub twitter_handle: String,
    pub default_image: String,
    pub theme_color: String,
    pub telephone: String,
}

impl SiteConfig {
    pub fn new(url: &str, contact_phone: &str) -> Self {
        let phone = whatsapp::normalize_argentine_phone(contact_phone)
            .unwrap_or_else(|_| whatsapp::digits_only(contact_phone));

        Self {
            name: "Nordia WhatsApp IA".to_string(),
            url: url.trim_end_matches('/').to_string(),
            locale: "es_AR".to_string(),
            twitter_handle: "@nordia_ia".to_string(),
            default_image: "/og-image.jpg".to_string(),
            theme_color: "#00ff88".to_string(),
            telephone: whatsapp::format_phone_display(&phone),
        }
    }

    fn absolute(&self, path_or_url: &str) -> String {
        if path_or_url.starts_with("http") {
            path_or_url.to_string()
        } else {
            format!("{}{}", self.url, path_or_url)
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PageType {
    Home,
    Pricing,
    Faq,
    Demo,
    Blog,
    Contact,
}

impl PageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageType::Home => "home",
            PageType::Pricing => "pricing",
            PageType::Faq => "faq",
            PageType::Demo => "demo",
            PageType::Blog => "blog",
            PageType::Contact => "contact",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "home" => Some(PageType::Home),
            "pricing" => Some(PageType::Pricing),
            "faq" => Some(PageType::Faq),
            "demo" => Some(PageType::Demo),
            "blog" => Some(PageType::Blog),
            "contact" => Some(PageType::Contact),
            _ => None,
        }
    }

    /// Title, description and keywords. Prices are read from `pricing`.
    fn content(&self, pricing: &RoiModel) -> (String, String, &'static [&'static str]) {
        let founder = format_currency(pricing.founder_price, &CurrencyFormat::default());
        let monthly = format_plan_price(pricing.monthly_service_cost, PlanPeriod::Month);

        match self {
            PageType::Home => (
                "Nordia WhatsApp IA | Automatización de Atención al Cliente".to_string(),
                format!("Tu negocio responde WhatsApp 24/7 sin contratar a nadie. IA entrenada para tu negocio desde {founder}. Respondé consultas, agendá turnos y vendé más."),
                &[
                    "whatsapp ia",
                    "automatización whatsapp",
                    "chatbot whatsapp argentina",
                    "atención al cliente ia",
                    "respuestas automáticas whatsapp",
                    "agendar turnos whatsapp",
                    "whatsapp business ia",
                ],
            ),
            PageType::Pricing => (
                format!("Precios | Nordia WhatsApp IA - Planes desde {founder}"),
                format!(
                    "Planes simples sin sorpresas. Plan Founder {founder} por {} meses o Plan Mensual {monthly}. Sin permanencia, cancelás cuando quieras.",
                    pricing.founder_months,
                ),
                &[
                    "precios nordia",
                    "planes whatsapp ia",
                    "chatbot whatsapp precio argentina",
                    "automatización whatsapp costo",
                ],
            ),
            PageType::Faq => (
                "Preguntas Frecuentes | Nordia WhatsApp IA".to_string(),
                "Todo lo que necesitás saber sobre Nordia WhatsApp IA. Setup en 48hs, funciona con tu WhatsApp Business actual, soporte argentino.".to_string(),
                &[
                    "nordia faq",
                    "preguntas frecuentes whatsapp ia",
                    "como funciona chatbot whatsapp",
                ],
            ),
            PageType::Demo => (
                "Ver Demo | Nordia WhatsApp IA en Acción".to_string(),
                "Mirá cómo Nordia IA responde consultas, agenda turnos y atiende clientes automáticamente. Demo interactiva en vivo.".to_string(),
                &["demo whatsapp ia", "ver chatbot funcionando", "nordia demo"],
            ),
            PageType::Blog => (
                "Blog | Nordia WhatsApp IA - Tips de Automatización".to_string(),
                "Consejos y guías para automatizar tu negocio con WhatsApp. Aprendé a vender más y atender mejor con inteligencia artificial.".to_string(),
                &["blog automatización", "tips whatsapp business", "guias chatbot"],
            ),
            PageType::Contact => (
                "Contacto | Nordia WhatsApp IA".to_string(),
                "Contactanos por WhatsApp o email. Soporte 100% argentino, respondemos en horario comercial.".to_string(),
                &["contacto nordia", "soporte nordia", "whatsapp nordia"],
            ),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SeoOverrides {
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub image: Option<String>,
    pub no_index: bool,
    pub canonical: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OgImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub alt: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OpenGraph {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub locale: String,
    pub url: String,
    pub site_name: String,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_time: Option<String>,
    pub images: Vec<OgImage>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TwitterCard {
    pub card: &'static str,
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Robots {
    pub index: bool,
    pub follow: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    pub authors: Vec<String>,
    pub canonical: String,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub robots: Option<Robots>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme_color: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BlogPost {
    pub title: String,
    pub description: String,
    pub published_at: String,
    pub updated_at: Option<String>,
    pub author: Option<String>,
    pub image: Option<String>,
    pub slug: String,
}

pub fn page_metadata(
    site: &SiteConfig,
    pricing: &RoiModel,
    page: PageType,
    overrides: &SeoOverrides,
) -> PageMetadata {
    let (title, description, keywords) = page.content(pricing);
    let title = overrides.title.clone().unwrap_or(title);
    let description = overrides.description.clone().unwrap_or(description);
    let keywords = overrides
        .keywords
        .clone()
        .unwrap_or_else(|| keywords.iter().map(|k| k.to_string()).collect());

    let image = site.absolute(overrides.image.as_deref().unwrap_or(&site.default_image));
    let canonical = overrides.canonical.clone().unwrap_or_else(|| match page {
        PageType::Home => site.url.clone(),
        other => format!("{}/{}", site.url, other.as_str()),
    });

    PageMetadata {
        open_graph: OpenGraph {
            kind: "website",
            locale: site.locale.clone(),
            url: canonical.clone(),
            site_name: site.name.clone(),
            title: title.clone(),
            description: description.clone(),
            published_time: None,
            modified_time: None,
            images: vec![OgImage {
                url: image.clone(),
                width: 1200,
                height: 630,
                alt: title.clone(),
            }],
        },
        twitter: TwitterCard {
            card: "summary_large_image",
            title: title.clone(),
            description: description.clone(),
            images: vec![image],
            creator: Some(site.twitter_handle.clone()),
        },
        title,
        description,
        keywords: (!keywords.is_empty()).then(|| keywords.join(", ")),
        authors: vec![site.name.clone()],
        canonical,
        robots: Some(Robots {
            index: !overrides.no_index,
            follow: !overrides.no_index,
        }),
        theme_color: Some(site.theme_color.clone()),
    }
}

pub fn blog_post_metadata(site: &SiteConfig, post: &BlogPost) -> PageMetadata {
    let url = format!("{}/blog/{}", site.url, post.slug);
    let image = site.absolute(post.image.as_deref().unwrap_or(&site.default_image));
    let author = post.author.clone().unwrap_or_else(|| site.name.clone());

    PageMetadata {
        title: format!("{} | Blog Nordia", post.title),
        description: post.description.clone(),
        keywords: None,
        authors: vec![author],
        canonical: url.clone(),
        open_graph: OpenGraph {
            kind: "article",
            locale: site.locale.clone(),
            url,
            site_name: site.name.clone(),
            title: post.title.clone(),
            description: post.description.clone(),
            published_time: Some(post.published_at.clone()),
            modified_time: post.updated_at.clone(),
            images: vec![OgImage {
                url: image.clone(),
                width: 1200,
                height: 630,
                alt: post.title.clone(),
            }],
        },
        twitter: TwitterCard {
            card: "summary_large_image",
            title: post.title.clone(),
            description: post.description.clone(),
            images: vec![image],
            creator: None,
        },
        robots: None,
        theme_color: None,
    }
}

pub fn organization_schema(site: &SiteConfig) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "Organization",
        "name": "Nordia",
        "description": "Automatización de atención al cliente por WhatsApp con IA",
        "url": site.url,
        "logo": format!("{}/logo.png", site.url),
        "contactPoint": {
            "@type": "ContactPoint",
            "telephone": site.telephone,
            "contactType": "customer service",
            "availableLanguage": "Spanish",
        },
        "sameAs": [
            "https://instagram.com/nordia_ia",
            "https://twitter.com/nordia_ia",
        ],
    })
}

pub fn product_schema(pricing: &RoiModel) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "Product",
        "name": "Nordia WhatsApp IA",
        "description": "Sistema de automatización de respuestas por WhatsApp con inteligencia artificial para PyMEs",
        "brand": { "@type": "Brand", "name": "Nordia" },
        "offers": [
            {
                "@type": "Offer",
                "name": "Plan Founder",
                "price": format!("{}", pricing.founder_price),
                "priceCurrency": "ARS",
                "availability": "https://schema.org/InStock",
                "description": format!("{} meses de servicio con pago único", pricing.founder_months),
            },
            {
                "@type": "Offer",
                "name": "Plan Mensual",
                "price": format!("{}", pricing.monthly_service_cost),
                "priceCurrency": "ARS",
                "availability": "https://schema.org/InStock",
                "description": "Suscripción mensual sin permanencia",
            },
        ],
    })
}

pub fn faq_schema(faqs: &[(String, String)]) -> Value {
    let entities: Vec<Value> = faqs
        .iter()
        .map(|(question, answer)| {
            json!({
                "@type": "Question",
                "name": question,
                "acceptedAnswer": { "@type": "Answer", "text": answer },
            })
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "FAQPage",
        "mainEntity": entities,
    })
}

pub fn article_schema(site: &SiteConfig, post: &BlogPost) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "Article",
        "headline": post.title,
        "description": post.description,
        "image": site.absolute(post.image.as_deref().unwrap_or(&site.default_image)),
        "datePublished": post.published_at,
        "dateModified": post.updated_at.as_deref().unwrap_or(&post.published_at),
        "author": {
            "@type": "Person",
            "name": post.author.as_deref().unwrap_or("Equipo Nordia"),
        },
        "publisher": {
            "@type": "Organization",
            "name": site.name,
            "logo": { "@type": "ImageObject", "url": format!("{}/logo.png", site.url) },
        },
    })
}
