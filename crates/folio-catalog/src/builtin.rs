// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The built-in six-topic catalog.
//!
//! Declaration order matters: it is the tie-break order used by the scorer,
//! so the topics below must stay in this order.

use crate::topic::{Catalog, Topic};

const SERVICES_BODY: &str = "\
I offer comprehensive full-stack development and AI automation services including:
• Custom Web Applications (React, Next.js, Node.js)
• AI-Powered Solutions & Automation
• E-commerce Development
• API Development & Integration
• Database Design & Optimization
• Cloud Deployment & DevOps
Would you like details about any specific service?";

const PRICING_BODY: &str = "\
My pricing is flexible and project-based:
• Simple Landing Pages: $800 - $1,500
• Full-Stack Web Apps: $2,500 - $8,000
• AI Automation Solutions: $1,500 - $5,000
• E-commerce Platforms: $3,000 - $10,000
• Hourly Consultation: $75/hour

I offer free initial consultations to discuss your specific needs and provide accurate quotes.";

const WORKFLOW_BODY: &str = "\
My development process ensures quality and transparency:

1. 📋 Discovery & Planning (1-2 days)
   • Requirements gathering
   • Technical specification
   • Project timeline

2. 🎨 Design & Prototyping (2-5 days)
   • UI/UX design
   • Interactive prototypes
   • Client approval

3. 💻 Development (1-4 weeks)
   • Agile development cycles
   • Regular progress updates
   • Testing & quality assurance

4. 🚀 Deployment & Launch
   • Production deployment
   • Performance optimization
   • Training & documentation";

const COMMUNICATION_BODY: &str = "\
I believe in transparent and regular communication:

• Daily progress updates via Slack/Email
• Weekly video calls for project review
• Shared project dashboard for real-time tracking
• 24-48 hour response time for all messages
• Available for urgent support

You'll always know exactly where your project stands!";

const DELIVERY_BODY: &str = "\
I'm committed to timely, quality delivery:

• On-time delivery guarantee
• Staged delivery milestones
• 30-day post-launch support included
• Source code & documentation provided
• 1-year bug-fix warranty
• Optional maintenance packages available

Your success is my priority!";

const CONTACT_BODY: &str = "\
Ready to start your project? Let's connect:

📧 Email: hello@folio.dev
💼 LinkedIn: linkedin.com/in/folio
📱 Schedule a call: calendly.com/folio

I typically respond within 2-4 hours during business days.
Free consultation calls available!";

const FALLBACK: &str = "\
I'd be happy to help! I can provide information about:

• Services & capabilities
• Pricing & packages
• Development workflow
• Communication process
• Delivery timelines
• Contact information

What would you like to know more about?";

const GREETING: &str = "Hi! I'm here to help you learn about the services, \
pricing, and workflow on offer. What would you like to know?";

/// Builds the built-in catalog.
///
/// Keys in declaration order: `services`, `pricing`, `workflow`,
/// `communication`, `delivery`, `contact`.
pub fn builtin() -> Catalog {
    Catalog::new(
        vec![
            Topic::new("services", SERVICES_BODY),
            Topic::new("pricing", PRICING_BODY),
            Topic::new("workflow", WORKFLOW_BODY),
            Topic::new("communication", COMMUNICATION_BODY),
            Topic::new("delivery", DELIVERY_BODY),
            Topic::new("contact", CONTACT_BODY),
        ],
        FALLBACK,
        GREETING,
    )
}
