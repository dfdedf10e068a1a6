//! Starter document texts, surfaced through the CLI's `--template`
//! flag. The bracketed placeholders are meant to be filled in by the
//! user before export.

pub const BLANK: &str = "";

pub const ESSAY: &str = "[Your Name]
[Professor's Name]
[Course Name]
[Date]

Essay Title

Introduction paragraph goes here...

Body paragraph 1...

Body paragraph 2...

Conclusion...";

pub const REPORT: &str = "Title: [Report Title]
Author: [Your Name]
Date: [Date]
Course: [Course Name]

Executive Summary
[Brief overview of the report]

Introduction
[Background and purpose]

Methodology
[How the research was conducted]

Findings
[Key results and data]

Conclusion
[Summary and recommendations]

References
[List of sources]";

pub const ASSIGNMENT: &str = "Student Name: [Your Name]
Student ID: [ID Number]
Course: [Course Name]
Assignment: [Assignment Title]
Due Date: [Date]

Answer to Question 1:
[Your answer here]

Answer to Question 2:
[Your answer here]";

pub const FORMAL_LETTER: &str = "[Your Name]
[Your Address]
[City, State ZIP Code]
[Email Address]
[Phone Number]

[Date]

[Recipient's Name]
[Recipient's Title]
[Company/Organization Name]
[Address]
[City, State ZIP Code]

Dear [Mr./Ms./Dr.] [Last Name],

[Opening paragraph: State the purpose of your letter]

[Body paragraph: Provide details and supporting information]

[Closing paragraph: Summarize and state desired action]

Sincerely,

[Your Signature]
[Your Typed Name]";

pub const COVER_LETTER: &str = "[Your Name]
[Your Address]
[City, State ZIP Code]
[Email] | [Phone]

[Date]

[Hiring Manager's Name]
[Company Name]
[Company Address]
[City, State ZIP Code]

Dear [Hiring Manager's Name],

I am writing to express my strong interest in the [Position Title] position at [Company Name], as advertised on [where you found the job posting]. As a [your current status, e.g., recent graduate, current student] with [relevant experience/skills], I am excited about the opportunity to contribute to your team.

[Body paragraph 1: Highlight your relevant qualifications and experiences]

[Body paragraph 2: Explain why you're interested in this company and position]

[Body paragraph 3: Mention specific skills or achievements that make you a strong candidate]

I would welcome the opportunity to discuss how my background and skills would benefit [Company Name]. Thank you for considering my application. I look forward to hearing from you.

Sincerely,

[Your Name]";

pub const REQUEST_LETTER: &str = "[Your Name]
[Your Address]
[Email] | [Phone]

[Date]

[Recipient's Name]
[Recipient's Title]
[Department/Organization]

Subject: Request for [Specify: Leave/Permission/Information/etc.]

Dear [Mr./Ms./Dr.] [Last Name],

I am writing to formally request [state what you are requesting] for the period of [dates/duration] due to [brief reason].

[Provide detailed explanation and justification for your request]

[Mention any arrangements you have made to minimize impact]

I would be grateful if you could approve this request. Please let me know if you need any additional information or documentation.

Thank you for your consideration.

Respectfully,

[Your Name]
[Student ID/Employee ID if applicable]";

pub const RECOMMENDATION_REQUEST: &str = "[Your Name]
[Your Email]
[Your Phone]

[Date]

[Professor's Name]
[Department]
[University Name]

Dear Professor [Last Name],

I hope this email finds you well. I am writing to ask if you would be willing to write a letter of recommendation for me as I apply for [graduate school/internship/job position] at [institution/company name].

I thoroughly enjoyed your [course name] class during [semester/year], where I [mention specific achievement or project]. I believe your perspective on my [academic abilities/work ethic/specific skills] would greatly strengthen my application.

The application deadline is [date], and the letter should be submitted via [method]. I have attached my resume, personal statement, and [any other relevant documents] for your reference.

I understand this is a significant time commitment, and I would be happy to provide any additional information you might need. Please let me know if you are able to write this recommendation.

Thank you very much for considering my request.

Best regards,

[Your Name]";

pub const COMPLAINT_LETTER: &str = "[Your Name]
[Your Address]
[Email] | [Phone]

[Date]

[Recipient's Name]
[Recipient's Title]
[Company/Department Name]
[Address]

Subject: Formal Complaint Regarding [Issue]

Dear [Mr./Ms./Dr.] [Last Name],

I am writing to formally lodge a complaint regarding [briefly state the issue] that occurred on [date].

[Paragraph 1: Describe the situation in detail, including dates, times, and people involved]

[Paragraph 2: Explain how this issue has affected you and why it is unacceptable]

[Paragraph 3: State what resolution or action you expect]

I trust that this matter will be addressed promptly and appropriately. I would appreciate a response within [timeframe] regarding the steps being taken to resolve this issue.

Thank you for your attention to this matter.

Sincerely,

[Your Name]
[Reference Number/Account Number if applicable]";

/// All templates, by CLI name.
pub const ALL: [(&str, &str); 9] = [
    ("blank", BLANK),
    ("essay", ESSAY),
    ("report", REPORT),
    ("assignment", ASSIGNMENT),
    ("formal-letter", FORMAL_LETTER),
    ("cover-letter", COVER_LETTER),
    ("request-letter", REQUEST_LETTER),
    ("recommendation-request", RECOMMENDATION_REQUEST),
    ("complaint-letter", COMPLAINT_LETTER),
];

/// Look up a template by name.
pub fn by_name(name: &str) -> Option<&'static str> {
    ALL.iter()
        .find(|(key, _)| *key == name)
        .map(|(_, text)| *text)
}
