use std::fmt;

/// Delimiter on both sides of a token name
pub const DELIMITER: &str = "%%";

/// Every substitution point a CV template may contain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    FirstName,
    LastName,
    Title,
    GithubUrl,
    GithubLabel,
    WebsiteUrl,
    WebsiteLabel,
    Email,
    Headshot,
    AddressLine1,
    AddressCity,
    Phone,
    Country,
    Dob,
    LinkedinUrl,
    LinkedinLabel,
    ProfileSummary,
    TechLogos,
    Skills,
    Languages,
    Employment,
    Education,
}

impl Token {
    pub const ALL: [Token; 22] = [
        Token::FirstName,
        Token::LastName,
        Token::Title,
        Token::GithubUrl,
        Token::GithubLabel,
        Token::WebsiteUrl,
        Token::WebsiteLabel,
        Token::Email,
        Token::Headshot,
        Token::AddressLine1,
        Token::AddressCity,
        Token::Phone,
        Token::Country,
        Token::Dob,
        Token::LinkedinUrl,
        Token::LinkedinLabel,
        Token::ProfileSummary,
        Token::TechLogos,
        Token::Skills,
        Token::Languages,
        Token::Employment,
        Token::Education,
    ];

    /// Name between the delimiters
    pub fn name(self) -> &'static str {
        match self {
            Token::FirstName => "FIRSTNAME",
            Token::LastName => "LASTNAME",
            Token::Title => "TITLE",
            Token::GithubUrl => "GITHUB_URL",
            Token::GithubLabel => "GITHUB_LABEL",
            Token::WebsiteUrl => "WEBSITE_URL",
            Token::WebsiteLabel => "WEBSITE_LABEL",
            Token::Email => "EMAIL",
            Token::Headshot => "HEADSHOT",
            Token::AddressLine1 => "ADDRESS_LINE1",
            Token::AddressCity => "ADDRESS_CITY",
            Token::Phone => "PHONE",
            Token::Country => "COUNTRY",
            Token::Dob => "DOB",
            Token::LinkedinUrl => "LINKEDIN_URL",
            Token::LinkedinLabel => "LINKEDIN_LABEL",
            Token::ProfileSummary => "PROFILE_SUMMARY",
            Token::TechLogos => "TECH_LOGOS",
            Token::Skills => "SKILLS",
            Token::Languages => "LANGUAGES",
            Token::Employment => "EMPLOYMENT",
            Token::Education => "EDUCATION",
        }
    }

    /// Text as it appears in the template, e.g. `%%FIRSTNAME%%`
    pub fn literal(self) -> String {
        format!("{DELIMITER}{}{DELIMITER}", self.name())
    }

    /// Whether the token expands to a multi-line block rather than a scalar
    #[cfg(test)]
    fn is_block(self) -> bool {
        matches!(
            self,
            Token::TechLogos
                | Token::Skills
                | Token::Languages
                | Token::Employment
                | Token::Education
        )
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.literal())
    }
}
