//! The compiled-in BuildMyMeta integration guides.
//!
//! Content mirrors the published documentation: every entry follows the
//! Installation / Database Structure / Automatic / Manual arc, with the
//! per-database differences living in the snippets.

use super::catalog::{ContentBlock, DocEntry};

const NPM_URL: &str = "https://www.npmjs.com/package/build-my-meta";
const GITHUB_URL: &str = "https://github.com/buildmymeta/build-my-meta";

/// The JSON shape shared by every SQL/document backend.
const METADATA_SHAPE: &str = r#"{
    "userId": "string",
    "apiMethod": "string",
    "metadata": {
        "action": "string",
        "...": "any additional fields"
    },
    "status": "string",
    "error": {
        "message": "string",
        "stack": "string"
    },
    "responseMessage": "string",
    "responseTime": "number",
    "ip": "string",
    "userAgent": "string",
    "headers": {
        "...": "headers as key-value pairs"
    },
    "timestamp": "date"
}"#;

const AUTO_LOG_EXAMPLE: &str = r#"{
    "userId": "defaultUserId",
    "apiMethod": "POST",
    "metadata": {
        "url": "/login",
        "body": { "username": "exampleUser" },
        "params": {},
        "query": {}
    },
    "status": "200",
    "responseMessage": "User logged in",
    "responseTime": 123,
    "ip": "127.0.0.1",
    "userAgent": "Mozilla/5.0",
    "headers": {
        "content-type": "application/json"
    },
    "timestamp": "2024-11-11T06:30:19.002Z"
}"#;

fn install_snippet(extra_packages: &str) -> String {
    format!(
        "npm install build-my-meta {pkgs}\n\
         # Or, using Yarn\n\
         yarn add build-my-meta {pkgs}\n\
         # Or, using pnpm\n\
         pnpm add build-my-meta {pkgs}",
        pkgs = extra_packages
    )
}

fn structure_blocks(db_name: &str) -> Vec<ContentBlock> {
    vec![
        ContentBlock::title("Database Structure"),
        ContentBlock::paragraph(&format!(
            "Metadata entries in {} will have the following structure:",
            db_name
        )),
        ContentBlock::code("json", METADATA_SHAPE),
    ]
}

fn footer_blocks() -> Vec<ContentBlock> {
    vec![
        ContentBlock::button("View build-my-meta on npm", NPM_URL),
        ContentBlock::button("Browse the source on GitHub", GITHUB_URL),
    ]
}

pub fn builtin_entries() -> Vec<DocEntry> {
    vec![
        mongodb(),
        postgresql(),
        firebase(),
        sqlite(),
        mysql(),
        cassandra(),
        neo4j(),
        mariadb(),
        nextjs(),
    ]
}

fn mongodb() -> DocEntry {
    let mut content = vec![
        ContentBlock::title("Installation"),
        ContentBlock::paragraph(
            "Install the MongoDB package along with BuildMyMeta to integrate metadata \
             logging with MongoDB.",
        ),
        ContentBlock::code("bash", &install_snippet("mongoose")),
    ];
    content.extend(structure_blocks("MongoDB"));
    content.extend(vec![
        ContentBlock::title("Automatic Metadata Logging"),
        ContentBlock::paragraph(
            "Set up automatic metadata logging in MongoDB. Once configured, metadata will be \
             automatically saved to MongoDB without manual intervention. The `userId` parameter \
             is required in `BuildMyMeta` to identify users for metadata logs, but it can be \
             modified on a per-API basis if needed.",
        ),
        ContentBlock::code(
            "javascript",
            r#"const mongoose = require('mongoose');
const { BuildMyMeta, DB_TYPES } = require('build-my-meta');

// Initialize mongoose
mongoose.connect(process.env.MONGO_URI, { useNewUrlParser: true, useUnifiedTopology: true });

// Use BuildMyMeta with automatic logging (set to true) and pass `userId`
app.use(BuildMyMeta(mongoose, DB_TYPES.MONGODB, true, 'defaultUserId'));

// API route example
app.post('/login', (req, res) => {
    // Handle login
    res.send('User logged in');
});"#,
        ),
        ContentBlock::paragraph(
            "For a `POST` request to `/login`, here is an example of the metadata automatically \
             saved in MongoDB:",
        ),
        ContentBlock::code("json", AUTO_LOG_EXAMPLE),
        ContentBlock::title("Manual Metadata Logging"),
        ContentBlock::paragraph(
            "Configure manual logging in MongoDB to control when and what metadata is saved. \
             This allows customization of metadata entries using `LogCustomMetadata` and \
             flexibility to modify metadata for specific conditions.",
        ),
        ContentBlock::code(
            "javascript",
            r#"const mongoose = require('mongoose');
const { BuildMyMeta, LogCustomMetadata, DB_TYPES } = require('build-my-meta');

// Initialize mongoose
mongoose.connect(process.env.MONGO_URI, { useNewUrlParser: true, useUnifiedTopology: true });

// Use BuildMyMeta with manual logging (set to false)
app.use(BuildMyMeta(mongoose, DB_TYPES.MONGODB, false, 'defaultUserId'));

// Manually log metadata
app.post('/login', (req, res, next) => {
    let metadata = {
        userId: 'user123',             // Optional: Overrides defaultUserId for this request
        apiMethod: 'POST',
        metadata: { action: 'User login' },
        status: 201,
    };

    // Call LogCustomMetadata with the initial metadata
    LogCustomMetadata(metadata, req);

    // Example condition: add extra information if the user is not found
    if (!req.body.username) {
        metadata.metadata.error = "Username is missing";
        return next(new Error('Username is required'));
    }

    // Proceed with login processing...
    res.send('User logged in');
});"#,
        ),
        ContentBlock::paragraph(
            "In this example, metadata can be modified even after calling `LogCustomMetadata`. \
             This allows dynamic updates to metadata based on conditions within the API logic.",
        ),
    ]);
    content.extend(footer_blocks());

    DocEntry {
        id: "mongodb".to_string(),
        name: "MongoDB".to_string(),
        content,
    }
}

fn postgresql() -> DocEntry {
    let mut content = vec![
        ContentBlock::title("Installation"),
        ContentBlock::paragraph(
            "Install Sequelize along with BuildMyMeta and PostgreSQL packages for integrating \
             metadata logging with PostgreSQL.",
        ),
        ContentBlock::code("bash", &install_snippet("sequelize pg")),
    ];
    content.extend(structure_blocks("PostgreSQL"));
    content.extend(vec![
        ContentBlock::title("Automatic Metadata Logging"),
        ContentBlock::paragraph(
            "This setup will automatically log metadata entries in PostgreSQL. The `userId` \
             parameter is required in `BuildMyMeta` to identify users for metadata logs, but it \
             can be modified on a per-API basis if needed.",
        ),
        ContentBlock::code(
            "javascript",
            r#"const { Sequelize } = require('sequelize');
const { BuildMyMeta, DB_TYPES } = require('build-my-meta');

// Initialize Sequelize with PostgreSQL
const sequelize = new Sequelize(process.env.POSTGRES_URL, { dialect: 'postgres' });

// Use BuildMyMeta with automatic logging (set to true) and pass `userId`
app.use(BuildMyMeta(sequelize, DB_TYPES.POSTGRES, true, 'defaultUserId'));

// API route example
app.post('/login', (req, res) => {
    // Handle login
    res.send('User logged in');
});"#,
        ),
        ContentBlock::title("Manual Metadata Logging"),
        ContentBlock::paragraph(
            "Enable manual logging with PostgreSQL, which requires calling LogCustomMetadata to \
             log metadata. This allows you to control when and what metadata is saved, with \
             flexibility to modify metadata for specific conditions.",
        ),
        ContentBlock::code(
            "javascript",
            r#"const { Sequelize } = require('sequelize');
const { BuildMyMeta, LogCustomMetadata, DB_TYPES } = require('build-my-meta');

const sequelize = new Sequelize(process.env.POSTGRES_URL, { dialect: 'postgres' });

// Use BuildMyMeta with manual logging (set to false)
app.use(BuildMyMeta(sequelize, DB_TYPES.POSTGRES, false, 'defaultUserId'));

app.post('/login', (req, res, next) => {
    let metadata = {
        userId: 'user123',
        apiMethod: 'POST',
        metadata: { action: 'User login' },
        status: 201,
    };

    LogCustomMetadata(metadata, req);

    if (!req.body.username) {
        metadata.metadata.error = "Username is missing";
        return next(new Error('Username is required'));
    }

    res.send('User logged in');
});"#,
        ),
        ContentBlock::title("Using `LogCustomMetadata` for Dynamic Metadata Updates"),
        ContentBlock::paragraph(
            "With `LogCustomMetadata`, you can modify the metadata after the initial function \
             call to add specific information. Here's how to use it effectively:",
        ),
        ContentBlock::paragraph(
            "1. Define initial metadata: Define essential fields, including `apiMethod`, \
             `metadata`, `status`, and optionally `userId`.",
        ),
        ContentBlock::paragraph(
            "2. Modify metadata based on conditions: After calling `LogCustomMetadata(metadata, \
             req)`, you can dynamically add to the metadata object based on your API logic.",
        ),
        ContentBlock::paragraph(
            "3. Finalize the response: The metadata will automatically capture the final \
             response details, including status and error, at the end of the request.",
        ),
        ContentBlock::title("Metadata Logging to CSV Files"),
        ContentBlock::paragraph(
            "BuildMyMeta logs metadata to CSV files in your project folder under the directory \
             `buildmymetalogs`. This directory contains four files:",
        ),
        ContentBlock::paragraph(
            "`metaSuccess.csv` - Stores successfully logged metadata entries processed by \
             BuildMyMeta.",
        ),
        ContentBlock::paragraph(
            "`metaError.csv` - Stores metadata entries with errors or issues encountered during \
             logging in BuildMyMeta.",
        ),
        ContentBlock::paragraph("`apiSuccess.csv` - Logs successful responses for user API calls."),
        ContentBlock::paragraph("`apiError.csv` - Logs error responses for user API calls."),
    ]);
    content.extend(footer_blocks());

    DocEntry {
        id: "postgresql".to_string(),
        name: "PostgreSQL".to_string(),
        content,
    }
}

fn firebase() -> DocEntry {
    let mut content = vec![
        ContentBlock::title("Installation"),
        ContentBlock::paragraph(
            "Install Firebase Admin SDK to enable BuildMyMeta support for Firestore and \
             Realtime Database in Firebase.",
        ),
        ContentBlock::code("bash", &install_snippet("firebase-admin")),
    ];
    content.extend(structure_blocks("Firebase"));
    content.extend(vec![
        ContentBlock::title("Automatic Metadata Logging"),
        ContentBlock::paragraph(
            "Initialize the Firebase app once and pass it to `BuildMyMeta`. Use \
             `DB_TYPES.FIRESTORE` for Firestore or `DB_TYPES.FIREBASEREALTIME` for the \
             Realtime Database.",
        ),
        ContentBlock::code(
            "javascript",
            r#"const admin = require('firebase-admin');
const { BuildMyMeta, DB_TYPES } = require('build-my-meta');

const firebaseApp = admin.initializeApp({
    credential: admin.credential.cert(require('./serviceAccountKey.json')),
});

// Use BuildMyMeta with automatic logging (set to true) and pass `userId`
app.use(BuildMyMeta(firebaseApp, DB_TYPES.FIRESTORE, true, 'defaultUserId'));"#,
        ),
        ContentBlock::title("Manual Metadata Logging"),
        ContentBlock::paragraph(
            "Enable manual logging with Firebase to control when and what metadata is saved \
             using `LogCustomMetadata`.",
        ),
        ContentBlock::code(
            "javascript",
            r#"const { BuildMyMeta, LogCustomMetadata, DB_TYPES } = require('build-my-meta');

// Use BuildMyMeta with manual logging (set to false)
app.use(BuildMyMeta(firebaseApp, DB_TYPES.FIRESTORE, false, 'defaultUserId'));

app.post('/login', (req, res) => {
    LogCustomMetadata({
        apiMethod: 'POST',
        metadata: { action: 'User login' },
        status: 201,
    }, req);
    res.send('User logged in');
});"#,
        ),
    ]);
    content.extend(footer_blocks());

    DocEntry {
        id: "firebase".to_string(),
        name: "Firebase".to_string(),
        content,
    }
}

fn sqlite() -> DocEntry {
    let mut content = vec![
        ContentBlock::title("Installation"),
        ContentBlock::paragraph(
            "Install Sequelize along with BuildMyMeta and the SQLite driver for integrating \
             metadata logging with SQLite.",
        ),
        ContentBlock::code("bash", &install_snippet("sequelize sqlite3")),
    ];
    content.extend(structure_blocks("SQLite"));
    content.extend(vec![
        ContentBlock::title("Automatic Metadata Logging"),
        ContentBlock::paragraph(
            "Point Sequelize at a local database file; metadata is then saved to SQLite \
             without manual intervention.",
        ),
        ContentBlock::code(
            "javascript",
            r#"const { Sequelize } = require('sequelize');
const { BuildMyMeta, DB_TYPES } = require('build-my-meta');

const sequelize = new Sequelize({ dialect: 'sqlite', storage: './metadata.sqlite' });

app.use(BuildMyMeta(sequelize, DB_TYPES.SQLITE, true, 'defaultUserId'));"#,
        ),
        ContentBlock::title("Manual Metadata Logging"),
        ContentBlock::paragraph(
            "Enable manual logging with SQLite, which requires calling `LogCustomMetadata` to \
             log metadata for each request you care about.",
        ),
        ContentBlock::code(
            "javascript",
            r#"app.use(BuildMyMeta(sequelize, DB_TYPES.SQLITE, false, 'defaultUserId'));

app.post('/login', (req, res) => {
    LogCustomMetadata({
        apiMethod: 'POST',
        metadata: { action: 'User login' },
        status: 201,
    }, req);
    res.send('User logged in');
});"#,
        ),
    ]);
    content.extend(footer_blocks());

    DocEntry {
        id: "sqlite".to_string(),
        name: "SQLite".to_string(),
        content,
    }
}

fn mysql() -> DocEntry {
    let mut content = vec![
        ContentBlock::title("Installation"),
        ContentBlock::paragraph(
            "Install Sequelize along with BuildMyMeta and the MySQL driver for integrating \
             metadata logging with MySQL.",
        ),
        ContentBlock::code("bash", &install_snippet("sequelize mysql2")),
    ];
    content.extend(structure_blocks("MySQL"));
    content.extend(vec![
        ContentBlock::title("Automatic Metadata Logging"),
        ContentBlock::paragraph(
            "This setup will automatically log metadata entries in MySQL. The `userId` \
             parameter identifies users for metadata logs and can be overridden per request.",
        ),
        ContentBlock::code(
            "javascript",
            r#"const { Sequelize } = require('sequelize');
const { BuildMyMeta, DB_TYPES } = require('build-my-meta');

const sequelize = new Sequelize(process.env.MYSQL_URL, { dialect: 'mysql' });

app.use(BuildMyMeta(sequelize, DB_TYPES.MYSQL, true, 'defaultUserId'));"#,
        ),
        ContentBlock::title("Manual Metadata Logging"),
        ContentBlock::paragraph(
            "Enable manual logging with MySQL to control when and what metadata is saved.",
        ),
        ContentBlock::code(
            "javascript",
            r#"app.use(BuildMyMeta(sequelize, DB_TYPES.MYSQL, false, 'defaultUserId'));

app.post('/login', (req, res) => {
    LogCustomMetadata({
        apiMethod: 'POST',
        metadata: { action: 'User login' },
        status: 201,
    }, req);
    res.send('User logged in');
});"#,
        ),
    ]);
    content.extend(footer_blocks());

    DocEntry {
        id: "mysql".to_string(),
        name: "MySQL".to_string(),
        content,
    }
}

fn cassandra() -> DocEntry {
    let mut content = vec![
        ContentBlock::title("Installation"),
        ContentBlock::paragraph(
            "Install the DataStax driver along with BuildMyMeta to integrate metadata logging \
             with Apache Cassandra.",
        ),
        ContentBlock::code("bash", &install_snippet("cassandra-driver")),
    ];
    content.extend(structure_blocks("Cassandra"));
    content.extend(vec![
        ContentBlock::title("Automatic Metadata Logging"),
        ContentBlock::paragraph(
            "Connect a Cassandra client and hand it to `BuildMyMeta`; metadata rows are written \
             to the configured keyspace automatically.",
        ),
        ContentBlock::code(
            "javascript",
            r#"const cassandra = require('cassandra-driver');
const { BuildMyMeta, DB_TYPES } = require('build-my-meta');

const cassandraClient = new cassandra.Client({
    contactPoints: ['127.0.0.1'],
    localDataCenter: 'datacenter1',
    keyspace: 'metadata',
});

app.use(BuildMyMeta(cassandraClient, DB_TYPES.CASSANDRA, true, 'defaultUserId'));"#,
        ),
        ContentBlock::title("Manual Metadata Logging"),
        ContentBlock::paragraph(
            "Enable manual logging with Cassandra to control when and what metadata is saved.",
        ),
        ContentBlock::code(
            "javascript",
            r#"app.use(BuildMyMeta(cassandraClient, DB_TYPES.CASSANDRA, false, 'defaultUserId'));

app.post('/login', (req, res) => {
    LogCustomMetadata({
        apiMethod: 'POST',
        metadata: { action: 'User login' },
        status: 201,
    }, req);
    res.send('User logged in');
});"#,
        ),
    ]);
    content.extend(footer_blocks());

    DocEntry {
        id: "cassandra".to_string(),
        name: "Cassandra".to_string(),
        content,
    }
}

fn neo4j() -> DocEntry {
    let mut content = vec![
        ContentBlock::title("Installation"),
        ContentBlock::paragraph(
            "Install the official Neo4j driver along with BuildMyMeta to integrate metadata \
             logging with Neo4j.",
        ),
        ContentBlock::code("bash", &install_snippet("neo4j-driver")),
    ];
    content.extend(structure_blocks("Neo4j"));
    content.extend(vec![
        ContentBlock::title("Automatic Metadata Logging"),
        ContentBlock::paragraph(
            "Metadata entries are stored as nodes; pass an authenticated driver to \
             `BuildMyMeta` to enable automatic logging.",
        ),
        ContentBlock::code(
            "javascript",
            r#"const neo4j = require('neo4j-driver');
const { BuildMyMeta, DB_TYPES } = require('build-my-meta');

const driver = neo4j.driver(
    process.env.NEO4J_URI,
    neo4j.auth.basic(process.env.NEO4J_USER, process.env.NEO4J_PASSWORD)
);

app.use(BuildMyMeta(driver, DB_TYPES.NEO4J, true, 'defaultUserId'));"#,
        ),
        ContentBlock::title("Manual Metadata Logging"),
        ContentBlock::paragraph(
            "Enable manual logging with Neo4j to control when and what metadata is saved.",
        ),
        ContentBlock::code(
            "javascript",
            r#"app.use(BuildMyMeta(driver, DB_TYPES.NEO4J, false, 'defaultUserId'));

app.post('/login', (req, res) => {
    LogCustomMetadata({
        apiMethod: 'POST',
        metadata: { action: 'User login' },
        status: 201,
    }, req);
    res.send('User logged in');
});"#,
        ),
    ]);
    content.extend(footer_blocks());

    DocEntry {
        id: "neo4j".to_string(),
        name: "Neo4j".to_string(),
        content,
    }
}

fn mariadb() -> DocEntry {
    let mut content = vec![
        ContentBlock::title("Installation"),
        ContentBlock::paragraph(
            "Install Sequelize along with BuildMyMeta and the MariaDB driver for integrating \
             metadata logging with MariaDB.",
        ),
        ContentBlock::code("bash", &install_snippet("sequelize mariadb")),
    ];
    content.extend(structure_blocks("MariaDB"));
    content.extend(vec![
        ContentBlock::title("Automatic Metadata Logging"),
        ContentBlock::paragraph(
            "This setup will automatically log metadata entries in MariaDB without manual \
             intervention.",
        ),
        ContentBlock::code(
            "javascript",
            r#"const { Sequelize } = require('sequelize');
const { BuildMyMeta, DB_TYPES } = require('build-my-meta');

const sequelize = new Sequelize(process.env.MARIADB_URL, { dialect: 'mariadb' });

app.use(BuildMyMeta(sequelize, DB_TYPES.MARIADB, true, 'defaultUserId'));"#,
        ),
        ContentBlock::title("Manual Metadata Logging"),
        ContentBlock::paragraph(
            "Enable manual logging with MariaDB to control when and what metadata is saved.",
        ),
        ContentBlock::code(
            "javascript",
            r#"app.use(BuildMyMeta(sequelize, DB_TYPES.MARIADB, false, 'defaultUserId'));

app.post('/login', (req, res) => {
    LogCustomMetadata({
        apiMethod: 'POST',
        metadata: { action: 'User login' },
        status: 201,
    }, req);
    res.send('User logged in');
});"#,
        ),
    ]);
    content.extend(footer_blocks());

    DocEntry {
        id: "mariadb".to_string(),
        name: "MariaDB".to_string(),
        content,
    }
}

fn nextjs() -> DocEntry {
    let mut content = vec![
        ContentBlock::title("Installation"),
        ContentBlock::paragraph(
            "Install Mongoose or other database packages based on your preference to enable \
             metadata logging in Next.js.",
        ),
        ContentBlock::code("bash", &install_snippet("mongoose")),
    ];
    content.extend(structure_blocks("MongoDB or your chosen database"));
    content.extend(vec![
        ContentBlock::title("Automatic Metadata Logging"),
        ContentBlock::paragraph(
            "Enable automatic logging of metadata for API routes in Next.js. The `userId` \
             parameter is required in `BuildMyMeta` for identifying users in metadata logs, \
             and it can be modified per API request if needed.",
        ),
        ContentBlock::code(
            "javascript",
            r#"// pages/api/data.js
import mongoose from 'mongoose';
import { BuildMyMeta, DB_TYPES } from 'build-my-meta';

const handler = async (req, res) => {
    if (req.method === 'GET') {
        res.status(200).json({ message: 'Data retrieved' });
    } else {
        res.status(405).json({ error: 'Method Not Allowed' });
    }
};

// Initialize mongoose connection
const db = mongoose.connect(process.env.MONGO_URI);

export default BuildMyMeta(db, DB_TYPES.MONGODB, true, 'defaultUserId')(handler);"#,
        ),
        ContentBlock::title("Manual Metadata Logging"),
        ContentBlock::paragraph(
            "Wrap the handler with manual logging enabled and call `LogCustomMetadata` inside \
             the route for the requests you want recorded.",
        ),
        ContentBlock::code(
            "javascript",
            r#"// pages/api/data.js
import { BuildMyMeta, LogCustomMetadata, DB_TYPES } from 'build-my-meta';

const handler = async (req, res) => {
    LogCustomMetadata({
        apiMethod: req.method,
        metadata: { action: 'Data access' },
        status: 200,
    }, req);
    res.status(200).json({ message: 'Data retrieved' });
};

export default BuildMyMeta(db, DB_TYPES.MONGODB, false, 'defaultUserId')(handler);"#,
        ),
    ]);
    content.extend(footer_blocks());

    DocEntry {
        id: "nextjs".to_string(),
        name: "Next.js".to_string(),
        content,
    }
}
