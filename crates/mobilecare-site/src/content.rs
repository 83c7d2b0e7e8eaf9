//! Site content model.
//!
//! Everything the pages display lives in [`SiteContent`]. The default value
//! is the published Best Mobile Care content; a TOML file can override any
//! part of it.

use crate::error::SiteError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// All text and links shown on the site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteContent {
	/// Business name shown in the brand, footer and titles.
	pub company_name: String,
	/// Badge text above the hero heading.
	pub tagline: String,
	/// Hero heading and lead paragraph.
	pub hero: HeroContent,
	/// How to reach the shop.
	pub contact: ContactInfo,
	/// The lead technician.
	pub technician: Technician,
	/// Repair services, in display order.
	pub services: Vec<Service>,
	/// Headline figures under the hero.
	pub stats: Vec<Stat>,
	/// About section copy.
	pub about: AboutContent,
	/// Footer copy.
	pub footer: FooterContent,
	/// Website credit shown on the developer page.
	pub developer: DeveloperCredit,
	/// Year in the copyright line.
	pub copyright_year: u16,
}

/// Hero heading and lead paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroContent {
	/// First, highlighted line of the heading.
	pub heading_lead: String,
	/// Second line of the heading.
	pub heading_rest: String,
	/// Paragraph under the heading.
	pub description: String,
}

/// Contact channels and map location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
	/// Phone number, used for `tel:` links.
	pub phone: String,
	/// Email address.
	pub email: String,
	/// Facebook page URL.
	pub facebook: String,
	/// WhatsApp number in any punctuation.
	pub whatsapp: String,
	/// Street address.
	pub location: String,
	/// Embeddable map URL.
	pub map_embed_url: String,
}

impl ContactInfo {
	/// `tel:` link for the phone number.
	pub fn tel_href(&self) -> String {
		format!("tel:{}", self.phone)
	}

	/// `mailto:` link for the email address.
	pub fn mailto_href(&self) -> String {
		format!("mailto:{}", self.email)
	}

	/// `wa.me` chat link; only the digits of the number are kept.
	pub fn whatsapp_href(&self) -> String {
		let digits: String = self.whatsapp.chars().filter(char::is_ascii_digit).collect();
		format!("https://wa.me/{}", digits)
	}
}

/// The lead technician.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Technician {
	/// Full name.
	pub name: String,
	/// Years of experience, e.g. `19+`.
	pub experience: String,
	/// Short profile.
	pub description: String,
}

/// One repair service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
	/// Unique identifier.
	pub id: u32,
	/// Card heading.
	pub title: String,
	/// Card summary.
	pub description: String,
	/// Icon name used as a styling hook.
	#[serde(default)]
	pub icon: String,
	/// Promotional offer.
	pub offer: String,
	/// Bullet points.
	#[serde(default)]
	pub features: Vec<String>,
}

/// A headline figure such as `5000+ Repairs Done`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
	/// The figure.
	pub value: String,
	/// What it counts.
	pub label: String,
}

/// A reason to choose the shop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
	/// Icon name used as a styling hook.
	#[serde(default)]
	pub icon: String,
	/// Heading.
	pub title: String,
	/// Supporting sentence.
	pub description: String,
}

/// About section copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AboutContent {
	/// Intro paragraph.
	pub intro: String,
	/// Reasons shown after the technician highlight.
	pub highlights: Vec<Highlight>,
}

/// Footer copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterContent {
	/// Sentence under the footer brand.
	pub blurb: String,
	/// Short service names listed in the footer.
	pub services: Vec<String>,
}

/// Website credit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeveloperCredit {
	/// Full name.
	pub name: String,
	/// Initials for the avatar.
	pub initials: String,
	/// Job title.
	pub role: String,
	/// Credit line.
	pub credit: String,
	/// Email address.
	pub email: String,
	/// Portfolio URL.
	pub website: String,
	/// GitHub profile URL.
	pub github: String,
	/// Introductory paragraph, before the portfolio link.
	pub bio: String,
}

/// Strips the scheme from a URL for display.
pub fn display_url(url: &str) -> &str {
	url.strip_prefix("https://")
		.or_else(|| url.strip_prefix("http://"))
		.unwrap_or(url)
}

impl SiteContent {
	/// Parses content from TOML. Missing keys keep their default values.
	pub fn from_toml_str(source: &str) -> Result<Self, SiteError> {
		let content: Self = toml::from_str(source)?;
		content.validate()?;
		Ok(content)
	}

	/// Loads content from a TOML file.
	pub fn load(path: &Path) -> Result<Self, SiteError> {
		let source = fs::read_to_string(path).map_err(|source| SiteError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		tracing::debug!(path = %path.display(), "loading site content");
		Self::from_toml_str(&source)
	}

	/// Rejects content the pages cannot render sensibly.
	pub fn validate(&self) -> Result<(), SiteError> {
		if self.company_name.trim().is_empty() {
			return Err(SiteError::InvalidContent(
				"company_name must not be empty".to_string(),
			));
		}

		let mut ids = HashSet::new();
		for service in &self.services {
			if !ids.insert(service.id) {
				return Err(SiteError::InvalidContent(format!(
					"duplicate service id {}",
					service.id
				)));
			}
		}

		Ok(())
	}
}

fn strings(items: &[&str]) -> Vec<String> {
	items.iter().map(|s| s.to_string()).collect()
}

impl Default for SiteContent {
	fn default() -> Self {
		Self {
			company_name: "Best Mobile Care".to_string(),
			tagline: "Nepal's Trusted Mobile Repair Expert".to_string(),
			hero: HeroContent::default(),
			contact: ContactInfo::default(),
			technician: Technician::default(),
			services: default_services(),
			stats: vec![
				Stat {
					value: "19+".to_string(),
					label: "Years Experience".to_string(),
				},
				Stat {
					value: "5000+".to_string(),
					label: "Repairs Done".to_string(),
				},
				Stat {
					value: "100%".to_string(),
					label: "Satisfaction".to_string(),
				},
			],
			about: AboutContent::default(),
			footer: FooterContent::default(),
			developer: DeveloperCredit::default(),
			copyright_year: 2025,
		}
	}
}

impl Default for HeroContent {
	fn default() -> Self {
		Self {
			heading_lead: "Professional Mobile".to_string(),
			heading_rest: "Repair Solutions".to_string(),
			description: "Expert technicians with 19+ years of experience. From screen repairs to \
				advanced chip-level solutions - we fix it all with precision and care."
				.to_string(),
		}
	}
}

impl Default for ContactInfo {
	fn default() -> Self {
		Self {
			phone: "+977-9851234567".to_string(),
			email: "info@bestmobilecare.com".to_string(),
			facebook: "https://facebook.com/bestmobilecare".to_string(),
			whatsapp: "+977-9851234567".to_string(),
			location: "Jadibuti, Narephat Road, Near Pani Padhero, Near NIC ASIA Bank, \
				Kathmandu, Nepal"
				.to_string(),
			map_embed_url: "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d113071.57912759307\
				!2d85.21839550093149!3d27.671343979391892!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1\
				!3m3!1m2!1s0x39eb19ef35a30083%3A0x5b9ec6dff6891d02!2sBest%20Mobile%20Care%20(BMC)\
				!5e0!3m2!1sne!2snp!4v1769874748332!5m2!1sne!2snp"
				.to_string(),
		}
	}
}

impl Default for Technician {
	fn default() -> Self {
		Self {
			name: "Raju Yadav".to_string(),
			experience: "19+".to_string(),
			description: "Expert mobile technician with extensive experience in all types of \
				mobile repairs and advanced chip-level solutions."
				.to_string(),
		}
	}
}

impl Default for AboutContent {
	fn default() -> Self {
		Self {
			intro: "At Best Mobile Care, we combine years of expertise with state-of-the-art \
				equipment to provide the best mobile repair services in Kathmandu."
				.to_string(),
			highlights: vec![
				Highlight {
					icon: "clock".to_string(),
					title: "Quick Service".to_string(),
					description: "Same-day repair service available for most issues with \
						quality guaranteed"
						.to_string(),
				},
				Highlight {
					icon: "star".to_string(),
					title: "Quality Parts".to_string(),
					description: "We use only genuine and high-quality replacement parts for \
						all repairs"
						.to_string(),
				},
			],
		}
	}
}

impl Default for FooterContent {
	fn default() -> Self {
		Self {
			blurb: "Your trusted mobile repair expert in Kathmandu with 19+ years of experience."
				.to_string(),
			services: strings(&[
				"Screen Repair",
				"Battery Replacement",
				"Water Damage Repair",
				"Chip Programming",
			]),
		}
	}
}

impl Default for DeveloperCredit {
	fn default() -> Self {
		Self {
			name: "Gobinda Prasad Paudel".to_string(),
			initials: "GPP".to_string(),
			role: "Full Stack Developer".to_string(),
			credit: "Best Mobile Care Website Creator".to_string(),
			email: "gobindapaudelofficial@gmail.com".to_string(),
			website: "https://gobindapoudel.com.np".to_string(),
			github: "https://github.com/gobinda-prasad-paudel".to_string(),
			bio: "I am a fullstack developer of this site. I specialize in creating modern, \
				responsive, and user-friendly web applications using cutting-edge technologies."
				.to_string(),
		}
	}
}

fn default_services() -> Vec<Service> {
	vec![
		Service {
			id: 1,
			title: "Broken Screen Repair".to_string(),
			description: "Professional screen replacement for all mobile brands with original \
				quality parts"
				.to_string(),
			icon: "smartphone".to_string(),
			offer: "20% OFF on screen replacement".to_string(),
			features: strings(&[
				"LCD/AMOLED screen replacement",
				"Touch screen repair",
				"Display quality assurance",
				"Same day service available",
			]),
		},
		Service {
			id: 2,
			title: "Charging Problem".to_string(),
			description: "Complete charging port repair and battery replacement services"
				.to_string(),
			icon: "battery-charging".to_string(),
			offer: "Free diagnosis".to_string(),
			features: strings(&[
				"Charging port repair/replacement",
				"Battery replacement",
				"Charging IC repair",
				"Fast charging issues",
			]),
		},
		Service {
			id: 3,
			title: "Network Problem".to_string(),
			description: "Expert solutions for all network and connectivity issues".to_string(),
			icon: "signal".to_string(),
			offer: "15% OFF".to_string(),
			features: strings(&[
				"No signal issues",
				"SIM card not detecting",
				"WiFi/Bluetooth problems",
				"Network IC repair",
			]),
		},
		Service {
			id: 4,
			title: "Mobile Dead Problems".to_string(),
			description: "Advanced chip-level repairs for all dead mobile issues".to_string(),
			icon: "power".to_string(),
			offer: "Free inspection".to_string(),
			features: strings(&[
				"Water damage repair",
				"Fall damage repair",
				"Motherboard fault repair",
				"Battery problem",
				"Power IC failure repair",
			]),
		},
		Service {
			id: 5,
			title: "EMMC/UFS Programming".to_string(),
			description: "Professional chip programming and data recovery services".to_string(),
			icon: "cpu".to_string(),
			offer: "Expert service".to_string(),
			features: strings(&[
				"F64 programming",
				"MIPI Tester services",
				"EasyJTAG programming",
				"Pragmafix solutions",
				"Data recovery",
			]),
		},
		Service {
			id: 6,
			title: "All Other Mobile Problems".to_string(),
			description: "Complete solution for any mobile issue you face".to_string(),
			icon: "wrench".to_string(),
			offer: "Best price guaranteed".to_string(),
			features: strings(&[
				"Camera issues",
				"Speaker/Microphone repair",
				"Button replacement",
				"Software problems",
				"Any other issues",
			]),
		},
	]
}
