// Prompt text and canned replies for the job-search assistant.

pub const SYSTEM_PROMPT: &str = "You are a helpful AI assistant for JobNexus, a job application platform. \
Your name is JobNexus AI. Your purpose is to help users with their job search and application process.

You can help with:
1. Resume and cover letter advice
2. Job search strategies
3. Interview preparation
4. Specific career questions
5. Application follow-up suggestions
6. Career development advice

Be concise, helpful, and specific. When appropriate, use markdown formatting for lists and emphasis.
If you don't know something, admit it and suggest alternatives. Don't make up information about specific companies or jobs.

Current user is looking for help with their job applications.";

pub const APOLOGY_REPLY: &str =
    "I'm sorry, I encountered an issue while processing your request. Please try again later.";

pub const EMPTY_REPLY: &str = "I'm sorry, I couldn't generate a response.";

pub const SUGGESTIONS_APOLOGY: &str =
    "I'm sorry, I encountered an issue while generating job suggestions. Please try again later.";

pub const SUGGESTIONS_EMPTY: &str =
    "I couldn't generate job suggestions at the moment. Please try again later.";

pub const RESUME_REPLY: &str = "Here are some tips for improving your resume:

1. **Tailor it to each job** - Customize your resume for each position
2. **Use action verbs** - Start bullet points with strong action verbs
3. **Quantify achievements** - Use numbers to show impact
4. **Keep it concise** - Aim for 1-2 pages maximum
5. **Include relevant keywords** - Match skills from the job description

Would you like me to help with a specific section of your resume?";

pub const INTERVIEW_REPLY: &str = "To prepare for your interview:

1. **Research the company** - Know their products, culture, and recent news
2. **Practice common questions** - Especially behavioral and technical ones
3. **Prepare your own questions** - Show interest in the role and company
4. **Use the STAR method** - For behavioral questions (Situation, Task, Action, Result)
5. **Do a mock interview** - Practice with a friend or record yourself

Is there a specific type of interview you're preparing for?";

pub const COVER_LETTER_REPLY: &str = "A strong cover letter should:

1. **Address the hiring manager by name** if possible
2. **Start with an attention-grabbing introduction**
3. **Explain why you're interested in the company specifically**
4. **Connect your experience to the job requirements**
5. **End with a clear call to action**

Keep it to one page and make sure it complements your resume rather than repeating it.";

pub const REJECTION_REPLY: &str = "I'm sorry to hear about the rejection. It's normal to feel disappointed, but try to view it as a learning opportunity:

1. **Ask for feedback** if possible
2. **Review your application materials**
3. **Consider if there were skills gaps** you could address
4. **Don't take it personally** - many factors affect hiring decisions
5. **Keep your momentum** by continuing to apply to other positions

Remember that even experienced professionals face rejection. The right opportunity is still out there.";

pub const DEFAULT_REPLY: &str = "I'm here to help with your job search journey. I can provide advice on resumes, cover letters, interviews, job search strategies, or handling application outcomes. What specific aspect of your job search would you like assistance with today?";

pub const CANNED_SUGGESTIONS: &str = "Based on your skills and location preferences, I recommend looking into these roles:

1. Frontend Developer positions at tech startups in San Francisco
2. UI/UX roles at design agencies with remote options
3. Product-focused engineering roles at established companies

These align well with your background in React and UI design experience.";

/// Keyword groups checked in order; the first group with a hit wins.
pub const KEYWORD_REPLIES: &[(&[&str], &str)] = &[
    (&["resume", "cv"], RESUME_REPLY),
    (&["interview", "prepare"], INTERVIEW_REPLY),
    (&["cover letter", "coverletter"], COVER_LETTER_REPLY),
    (&["rejected", "rejection"], REJECTION_REPLY),
];

pub fn build_suggestions_prompt(skills: &[String], location: &str) -> String {
    format!(
        "Given a job seeker with the following skills: {} who is looking for work in {}, \
         suggest 3-5 specific job roles that would be a good match. For each suggestion, include the role title, \
         why it's a good match, and a brief note on the type of company to target. \
         Format the response with numbered items and markdown.",
        skills.join(", "),
        location
    )
}
