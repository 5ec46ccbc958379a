//! Services, in navigation order

use super::strings;
use crate::content::{Faq, Media, Service, ServiceIcon};

fn service_image(slug: &str, title: &str, path: &str) -> Vec<Media> {
    let alt = format!(
        "{} - Professional {} services by Insertech in Qatar and Lebanon",
        title,
        slug.replace('-', " ")
    );
    vec![Media::new(path, alt)]
}

pub fn services() -> Vec<Service> {
    vec![
        Service {
            slug: "web-development".to_string(),
            title: "Website Design & Development".to_string(),
            description: "Creating stunning, responsive websites that deliver exceptional user experiences for businesses in Qatar, Lebanon, and across the Middle East.".to_string(),
            full_description: "We design and develop custom websites that not only look beautiful but also drive results. Our approach combines strategic thinking, creative design, and technical expertise to create digital experiences that engage your audience and achieve your business goals.".to_string(),
            category: "Web Development".to_string(),
            icon: ServiceIcon::Globe,
            media: service_image(
                "web-development",
                "Website Design & Development",
                "/services/web-development-detailed.png",
            ),
            features: strings(&[
                "User-centered design that creates intuitive, engaging experiences",
                "Clean, efficient code using modern frameworks like React and Next.js",
                "Robust, scalable backend systems that power your digital products",
                "Lightning-fast loading times and smooth interactions for optimal user experience",
            ]),
            technologies: strings(&[
                "React",
                "Next.js",
                "TypeScript",
                "Node.js",
                "Tailwind CSS",
                "GraphQL",
                "PostgreSQL",
                "MongoDB",
            ]),
            faqs: vec![
                Faq::new(
                    "How long does it take to develop a website?",
                    "The timeline for website development varies depending on complexity. Simple websites can be completed in 4-6 weeks, while more complex projects may take 2-3 months or more.",
                ),
                Faq::new(
                    "Do you provide website maintenance services?",
                    "Yes, we offer ongoing maintenance packages to ensure your website remains secure, up-to-date, and performing optimally.",
                ),
                Faq::new(
                    "Can you help with SEO for my website?",
                    "We implement SEO best practices during development and can provide comprehensive SEO services to improve your visibility in search engines.",
                ),
            ],
        },
        Service {
            slug: "mobile-development".to_string(),
            title: "Mobile App Development".to_string(),
            description: "Native and cross-platform mobile applications that engage users on any device, built by expert developers in Qatar and Lebanon.".to_string(),
            full_description: "Our mobile development team creates powerful, feature-rich applications for iOS and Android platforms. Whether you need a native app for maximum performance or a cross-platform solution for broader reach, we deliver mobile experiences that users love.".to_string(),
            category: "Mobile".to_string(),
            icon: ServiceIcon::Smartphone,
            media: service_image(
                "mobile-development",
                "Mobile App Development",
                "/services/mobile-development-detailed.png",
            ),
            features: strings(&[
                "High-performance iOS and Android apps using Swift, Kotlin, and Java",
                "Efficient development with React Native and Flutter for multiple platforms",
                "Intuitive interfaces that follow platform-specific design guidelines",
                "Rigorous testing across devices to ensure flawless performance",
            ]),
            technologies: strings(&[
                "React Native",
                "Flutter",
                "Swift",
                "Kotlin",
                "Firebase",
                "Redux",
                "MobX",
            ]),
            faqs: vec![
                Faq::new(
                    "What's the difference between native and cross-platform apps?",
                    "Native apps are built specifically for one platform (iOS or Android) using platform-specific languages. Cross-platform apps use frameworks like React Native or Flutter to share code across platforms, reducing development time and cost.",
                ),
                Faq::new(
                    "How much does it cost to develop a mobile app?",
                    "App development costs vary widely based on complexity, features, and platforms. Simple apps may start around $15,000, while complex apps can cost $50,000 or more.",
                ),
                Faq::new(
                    "Do you handle app store submissions?",
                    "Yes, we manage the entire process of submitting your app to the Apple App Store and Google Play Store, ensuring it meets all requirements and guidelines.",
                ),
            ],
        },
        Service {
            slug: "custom-software".to_string(),
            title: "Custom Software & AI".to_string(),
            description: "Tailored software solutions with cutting-edge AI capabilities for your unique business challenges in the Middle East market.".to_string(),
            full_description: "We develop custom software solutions that address your specific business challenges. By integrating artificial intelligence and machine learning capabilities, we create intelligent systems that automate processes, provide valuable insights, and drive innovation.".to_string(),
            category: "Software & AI".to_string(),
            icon: ServiceIcon::Code,
            media: service_image(
                "custom-software",
                "Custom Software & AI",
                "/services/custom-software-detailed.png",
            ),
            features: strings(&[
                "AI and machine learning integration for intelligent automation",
                "Custom business applications tailored to your specific needs",
                "Data analytics and visualization tools for better decision-making",
                "Scalable architecture that grows with your business",
            ]),
            technologies: strings(&[
                "Python",
                "TensorFlow",
                "PyTorch",
                "OpenAI",
                "AWS",
                "Google Cloud",
                "Azure",
            ]),
            faqs: vec![
                Faq::new(
                    "How do you approach custom software development?",
                    "We follow an agile methodology, starting with thorough requirements gathering, followed by iterative development with regular client feedback, testing, and deployment.",
                ),
                Faq::new(
                    "Can you integrate AI into my existing systems?",
                    "Yes, we can integrate AI capabilities into your existing software systems to enhance functionality, automate processes, and provide valuable insights.",
                ),
                Faq::new(
                    "How do you ensure the security of custom software?",
                    "We implement industry-standard security practices throughout the development process, including secure coding, regular security testing, and compliance with relevant regulations.",
                ),
            ],
        },
        Service {
            slug: "erp-systems".to_string(),
            title: "ERP Systems & Odoo".to_string(),
            description: "Comprehensive enterprise solutions that streamline operations and boost efficiency for businesses across Qatar, Lebanon, and the Middle East.".to_string(),
            full_description: "We specialize in implementing and customizing Odoo ERP systems that integrate all aspects of your business. Our solutions streamline operations, improve collaboration, and provide real-time insights that help you make better decisions and drive growth.".to_string(),
            category: "ERP & CRM".to_string(),
            icon: ServiceIcon::Database,
            media: service_image(
                "erp-systems",
                "ERP Systems & Odoo",
                "/services/erp-systems-detailed.png",
            ),
            features: strings(&[
                "Full Odoo ERP implementation and customization",
                "Business process automation and workflow optimization",
                "Integration with existing systems and data migration",
                "Comprehensive training and ongoing support",
            ]),
            technologies: strings(&[
                "Odoo",
                "Python",
                "PostgreSQL",
                "XML",
                "JavaScript",
                "QWeb",
                "REST API",
            ]),
            faqs: vec![
                Faq::new(
                    "What is Odoo and why should I choose it for my business?",
                    "Odoo is a comprehensive open-source ERP system that integrates all your business processes in one platform. It's highly customizable, cost-effective, and scales with your business growth.",
                ),
                Faq::new(
                    "How long does an ERP implementation take?",
                    "The timeline for ERP implementation depends on the size and complexity of your business. Typically, it ranges from 3-6 months for small to medium businesses and 6-12 months for larger enterprises.",
                ),
                Faq::new(
                    "Can you migrate data from our existing systems to Odoo?",
                    "Yes, we have extensive experience migrating data from various systems to Odoo. We ensure data integrity and minimal disruption to your business operations during the migration process.",
                ),
            ],
        },
        Service {
            slug: "digital-marketing".to_string(),
            title: "Digital Media & SEO".to_string(),
            description: "Strategic digital marketing that increases visibility and drives qualified traffic for businesses in Qatar, Lebanon, and throughout the Middle East.".to_string(),
            full_description: "Our digital marketing services help you reach and engage your target audience effectively. From search engine optimization to content marketing and social media management, we develop comprehensive strategies that increase your online visibility and drive meaningful results.".to_string(),
            category: "Marketing".to_string(),
            icon: ServiceIcon::BarChart,
            media: service_image(
                "digital-marketing",
                "Digital Media & SEO",
                "/services/digital-marketing-detailed.png",
            ),
            features: strings(&[
                "Search engine optimization (SEO) to improve organic rankings",
                "Content strategy and creation that resonates with your audience",
                "Social media management and paid advertising campaigns",
                "Analytics and reporting to measure performance and ROI",
            ]),
            technologies: strings(&[
                "Google Analytics",
                "SEMrush",
                "Ahrefs",
                "Google Ads",
                "Meta Ads",
                "Mailchimp",
                "HubSpot",
            ]),
            faqs: vec![
                Faq::new(
                    "How long does it take to see results from SEO?",
                    "SEO is a long-term strategy. While some improvements may be visible within 1-3 months, significant results typically take 4-6 months or longer, depending on your industry, competition, and starting point.",
                ),
                Faq::new(
                    "Do you offer social media management services?",
                    "Yes, we provide comprehensive social media management services, including content creation, posting schedules, community engagement, and performance analytics.",
                ),
                Faq::new(
                    "How do you measure the success of digital marketing campaigns?",
                    "We track key performance indicators (KPIs) such as website traffic, conversion rates, engagement metrics, and return on investment (ROI) to measure campaign success and make data-driven optimizations.",
                ),
            ],
        },
        Service {
            slug: "shopify".to_string(),
            title: "Shopify Development".to_string(),
            description: "Custom e-commerce solutions that drive sales and enhance customer experience for retailers in Qatar, Lebanon, and across the Middle East.".to_string(),
            full_description: "We create custom Shopify stores that stand out from the competition and drive conversions. Our e-commerce expertise ensures your online store not only looks great but also provides a seamless shopping experience that keeps customers coming back.".to_string(),
            category: "E-commerce".to_string(),
            icon: ServiceIcon::ShoppingBag,
            media: service_image(
                "shopify",
                "Shopify Development",
                "/services/shopify-detailed.png",
            ),
            features: strings(&[
                "Custom Shopify theme development and store design",
                "E-commerce strategy and conversion rate optimization",
                "App integration and custom functionality development",
                "Payment gateway and shipping integration",
            ]),
            technologies: strings(&[
                "Shopify",
                "Liquid",
                "JavaScript",
                "React",
                "Shopify API",
                "Shopify Plus",
                "Shopify Apps",
            ]),
            faqs: vec![
                Faq::new(
                    "Why should I choose Shopify for my online store?",
                    "Shopify is a leading e-commerce platform that offers reliability, security, and scalability. It's user-friendly, has extensive app integrations, and provides excellent support for businesses of all sizes.",
                ),
                Faq::new(
                    "Can you migrate my existing online store to Shopify?",
                    "Yes, we can migrate your existing online store to Shopify, including products, customers, orders, and content, ensuring a smooth transition with minimal disruption.",
                ),
                Faq::new(
                    "Do you provide ongoing support for Shopify stores?",
                    "We offer ongoing support and maintenance packages to ensure your Shopify store remains up-to-date, secure, and optimized for performance and conversions.",
                ),
            ],
        },
        Service {
            slug: "video-production".to_string(),
            title: "Video & Motion Graphics".to_string(),
            description: "Compelling visual content that tells your story and captivates your audience, created by expert video producers in Qatar and Lebanon.".to_string(),
            full_description: "Our video production and motion graphics services bring your brand to life through compelling visual storytelling. From promotional videos to animated explainers and product demonstrations, we create high-quality content that engages viewers and communicates your message effectively.".to_string(),
            category: "Media".to_string(),
            icon: ServiceIcon::Video,
            media: service_image(
                "video-production",
                "Video & Motion Graphics",
                "/services/video-production-detailed.png",
            ),
            features: strings(&[
                "Professional video production from concept to final delivery",
                "Motion graphics and animation for enhanced visual storytelling",
                "Explainer videos that simplify complex concepts",
                "Product demonstrations and promotional content",
            ]),
            technologies: strings(&[
                "Adobe Premiere Pro",
                "After Effects",
                "Cinema 4D",
                "Blender",
                "DaVinci Resolve",
                "Final Cut Pro",
            ]),
            faqs: vec![
                Faq::new(
                    "What types of videos do you produce?",
                    "We produce a wide range of videos including corporate videos, product demonstrations, explainer videos, testimonials, social media content, and animated motion graphics.",
                ),
                Faq::new(
                    "How long does video production take?",
                    "The timeline varies depending on the complexity of the project. Simple videos may take 2-3 weeks, while more complex productions can take 4-8 weeks from concept to final delivery.",
                ),
                Faq::new(
                    "Do you provide scriptwriting services?",
                    "Yes, our team includes experienced scriptwriters who can develop compelling narratives that align with your brand voice and effectively communicate your message.",
                ),
            ],
        },
    ]
}
