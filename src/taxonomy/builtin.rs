//! 内置技术分类表
//! 进程级不可变常量，表顺序即匹配与展示顺序，无需任何初始化

/// 分类名称 -> 技术名称列表（分类内顺序固定）
pub static CATEGORIES: &[(&str, &[&str])] = &[
    (
        "CMSs",
        &[
            "WordPress", "Joomla", "Drupal", "Magento", "Ghost", "Concrete5", "TYPO3",
            "Grav", "DotNetNuke", "Umbraco", "Craft CMS", "HubSpot CMS", "Squarespace",
            "Wix", "Shopify",
        ],
    ),
    (
        "Web Development Frameworks",
        &[
            "Angular", "React", "Vue.js", "Svelte", "Ember.js", "Backbone.js", "Laravel",
            "Symfony", "CodeIgniter", "CakePHP", "Django", "Flask", "Express.js",
            "Spring Boot", "Ruby on Rails", "ASP.NET", "Koa", "Phoenix",
        ],
    ),
    (
        "Web Servers",
        &["Apache", "Nginx", "LiteSpeed", "IIS", "Caddy", "Hiawatha", "Cherokee"],
    ),
    (
        "Application Servers",
        &["Tomcat", "JBoss", "GlassFish", "WebSphere", "WebLogic", "Jetty"],
    ),
    (
        "Programming Languages",
        &[
            "PHP", "Python", "Java", "Ruby", "JavaScript", "TypeScript", "Go", "C#",
            "Scala", "Perl", "C++",
        ],
    ),
    (
        "Database Systems",
        &[
            "MySQL", "PostgreSQL", "MongoDB", "MariaDB", "Oracle Database",
            "Microsoft SQL Server", "SQLite", "CouchDB", "Cassandra", "Redis",
        ],
    ),
    (
        "DevOps Tools",
        &[
            "Jenkins", "GitLab CI/CD", "CircleCI", "Bamboo", "Ansible", "Terraform",
            "Docker", "Kubernetes",
        ],
    ),
    (
        "Monitoring and Logging",
        &[
            "Splunk", "ELK Stack", "Prometheus", "Grafana", "Zabbix", "Datadog",
            "Nagios", "New Relic",
        ],
    ),
    (
        "E-commerce Platforms",
        &[
            "WooCommerce", "PrestaShop", "OpenCart", "BigCommerce",
            "Salesforce Commerce Cloud",
        ],
    ),
];
