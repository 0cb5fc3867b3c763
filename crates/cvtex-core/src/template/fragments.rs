use super::token::Token;
use crate::escape::escape_latex;
use crate::record::Record;
use crate::render;

/// Rendered value for every token, ready for substitution
///
/// URLs, the e-mail address and the headshot path are used inside `\href` and
/// `\includegraphics` arguments and stay raw; every other scalar is escaped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragments {
    pub first_name: String,
    pub last_name: String,
    pub title: String,
    pub github_url: String,
    pub github_label: String,
    pub website_url: String,
    pub website_label: String,
    pub email: String,
    pub headshot: String,
    pub address_line1: String,
    pub address_city: String,
    pub phone: String,
    pub country: String,
    pub dob: String,
    pub linkedin_url: String,
    pub linkedin_label: String,
    pub profile_summary: String,
    pub tech_logos: String,
    pub skills: String,
    pub languages: String,
    pub employment: String,
    pub education: String,
}

fn tex(text: &str) -> String {
    escape_latex(text).into_owned()
}

impl Fragments {
    pub fn from_record(record: &Record) -> Self {
        Self {
            first_name: tex(&record.name_first),
            last_name: tex(&record.name_last),
            title: tex(&record.title),
            github_url: record.github_url.clone(),
            github_label: tex(&record.github_label),
            website_url: record.website_url.clone(),
            website_label: tex(&record.website_label),
            email: record.email.clone(),
            headshot: record.headshot.clone(),
            address_line1: tex(&record.address_line1),
            address_city: tex(&record.address_city),
            phone: tex(&record.phone),
            country: tex(&record.country),
            dob: tex(&record.dob),
            linkedin_url: record.linkedin_url.clone(),
            linkedin_label: tex(&record.linkedin_label),
            profile_summary: tex(&record.profile_summary),
            tech_logos: render::tech_logos(&record.tech_logos),
            skills: render::skills(&record.skills),
            languages: render::languages(&record.languages),
            employment: render::timeline(record.employment.iter().map(|e| e.as_entry())),
            education: render::timeline(record.education.iter().map(|e| e.as_entry())),
        }
    }

    pub fn get(&self, token: Token) -> &str {
        match token {
            Token::FirstName => &self.first_name,
            Token::LastName => &self.last_name,
            Token::Title => &self.title,
            Token::GithubUrl => &self.github_url,
            Token::GithubLabel => &self.github_label,
            Token::WebsiteUrl => &self.website_url,
            Token::WebsiteLabel => &self.website_label,
            Token::Email => &self.email,
            Token::Headshot => &self.headshot,
            Token::AddressLine1 => &self.address_line1,
            Token::AddressCity => &self.address_city,
            Token::Phone => &self.phone,
            Token::Country => &self.country,
            Token::Dob => &self.dob,
            Token::LinkedinUrl => &self.linkedin_url,
            Token::LinkedinLabel => &self.linkedin_label,
            Token::ProfileSummary => &self.profile_summary,
            Token::TechLogos => &self.tech_logos,
            Token::Skills => &self.skills,
            Token::Languages => &self.languages,
            Token::Employment => &self.employment,
            Token::Education => &self.education,
        }
    }

    /// `(token, fragment)` pairs in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (Token, &str)> {
        Token::ALL.into_iter().map(move |token| (token, self.get(token)))
    }
}
