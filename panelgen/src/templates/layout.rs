//! Shell layout and dashboard templates

/// Responsive shell around every authenticated page
pub const DASHBOARD_LAYOUT: &str = r#"import { useEffect, useState } from "react";
import { Outlet, useLocation } from "react-router-dom";
import Sidebar from "./Sidebar";
import Header from "./Header";

const useMediaQuery = (query: string) => {
  const [matches, setMatches] = useState(() => window.matchMedia(query).matches);

  useEffect(() => {
    const media = window.matchMedia(query);
    const listener = (event: MediaQueryListEvent) => setMatches(event.matches);
    setMatches(media.matches);
    media.addEventListener("change", listener);
    return () => media.removeEventListener("change", listener);
  }, [query]);

  return matches;
};

export default function DashboardLayout() {
  const isMobile = useMediaQuery("(max-width: 768px)");
  const isTablet = useMediaQuery("(max-width: 1024px)");
  const [isSidebarOpen, setIsSidebarOpen] = useState(!isMobile);
  const location = useLocation();

  useEffect(() => {
    setIsSidebarOpen(!isMobile && !isTablet);
  }, [isMobile, isTablet]);

  useEffect(() => {
    if (isMobile) {
      setIsSidebarOpen(false);
    }
  }, [location.pathname, isMobile]);

  useEffect(() => {
    const handleEscape = (event: KeyboardEvent) => {
      if (event.key === "Escape" && isMobile && isSidebarOpen) {
        setIsSidebarOpen(false);
      }
    };
    document.addEventListener("keydown", handleEscape);
    return () => document.removeEventListener("keydown", handleEscape);
  }, [isMobile, isSidebarOpen]);

  return (
    <div className="flex h-screen overflow-hidden bg-background">
      <Sidebar isOpen={isSidebarOpen} setIsOpen={setIsSidebarOpen} isMobile={isMobile} />

      {isMobile && isSidebarOpen && (
        <div
          onClick={() => setIsSidebarOpen(false)}
          className="fixed inset-0 bg-black/60 z-30 backdrop-blur-sm"
          aria-hidden="true"
        />
      )}

      <div className="flex flex-col flex-1 min-w-0 transition-all duration-300 ease-in-out">
        <Header onMenuClick={() => setIsSidebarOpen(true)} />
        <main className="flex-1 overflow-hidden">
          <div className="h-full overflow-y-auto">
            <div className="container mx-auto p-4 md:p-6 lg:p-8">
              <Outlet />
            </div>
          </div>
        </main>
      </div>
    </div>
  );
}
"#;

/// Collapsible navigation built from the model list
pub const SIDEBAR: &str = r#"import React from "react";
import { Link, useLocation } from "react-router-dom";
import { ChevronDown, ChevronLeft, ChevronRight, Circle, Home, X,{{#each icons}} {{this}},{{/each}} } from "lucide-react";
import { cn } from "@/lib/utils";
import { Button } from "@/components/ui/button";
import { Collapsible, CollapsibleContent, CollapsibleTrigger } from "@/components/ui/collapsible";

interface NavItem {
  label: string;
  icon?: string;
  href?: string;
  children?: NavItem[];
}

const iconMap: Record<string, React.ElementType> = {
  Home,
{{#each icons}}
  {{this}},
{{/each}}
};

const navItems: NavItem[] = {{json nav_items}};

const isLinkActive = (item: NavItem, pathname: string): boolean => {
  if (item.href === pathname) return true;
  return item.children?.some((child) => isLinkActive(child, pathname)) ?? false;
};

function NavMenu({ items, pathname, isOpen }: { items: NavItem[]; pathname: string; isOpen: boolean }) {
  return (
    <div className="space-y-1">
      {items.map((item) => {
        const Icon = iconMap[item.icon ?? "LayoutGrid"] ?? Circle;
        const isActive = isLinkActive(item, pathname);
        const target = item.children ? item.children[0].href : item.href;

        if (!isOpen) {
          return (
            <Link
              key={item.label}
              to={target ?? "/"}
              title={item.label}
              className={cn(
                "flex items-center justify-center p-3 rounded-md text-gray-400 hover:text-white hover:bg-gray-800",
                isActive && "bg-gray-700 text-white",
              )}
            >
              <Icon size={22} />
            </Link>
          );
        }

        if (item.children) {
          return (
            <Collapsible key={item.label} className="w-full" defaultOpen={isActive}>
              <CollapsibleTrigger
                className={cn(
                  "flex items-center justify-between w-full p-3 rounded-md text-gray-400 hover:text-white hover:bg-gray-800 transition-colors",
                  isActive && "text-white",
                )}
              >
                <div className="flex items-center gap-4">
                  <Icon size={20} />
                  <span className="font-semibold">{item.label}</span>
                </div>
                <ChevronDown className="h-4 w-4" />
              </CollapsibleTrigger>
              <CollapsibleContent className="ps-10 py-1 space-y-1">
                {item.children.map((child) => (
                  <Link
                    key={child.href}
                    to={child.href ?? "/"}
                    className={cn(
                      "flex items-center gap-3 p-2 rounded-md transition-colors text-gray-400 hover:text-white hover:bg-gray-800",
                      pathname === child.href && "text-white font-semibold",
                    )}
                  >
                    <Circle className="h-2 w-2 fill-current" />
                    <span>{child.label}</span>
                  </Link>
                ))}
              </CollapsibleContent>
            </Collapsible>
          );
        }

        return (
          <Link
            key={item.label}
            to={item.href ?? "/"}
            className={cn(
              "flex items-center gap-4 p-3 rounded-md transition-colors text-gray-400 hover:text-white hover:bg-gray-800",
              isActive && "bg-gray-700 text-white",
            )}
          >
            <Icon size={20} />
            <span className="font-semibold">{item.label}</span>
          </Link>
        );
      })}
    </div>
  );
}

interface SidebarProps {
  isOpen: boolean;
  setIsOpen: (isOpen: boolean) => void;
  isMobile: boolean;
}

export default function Sidebar({ isOpen, setIsOpen, isMobile }: SidebarProps) {
  const location = useLocation();
  const onToggle = () => setIsOpen(!isOpen);

  if (isMobile) {
    return (
      <aside
        className={cn(
          "fixed top-0 start-0 h-full w-72 bg-gray-900 text-white border-e border-gray-800 z-40 flex flex-col transition-transform duration-300 ease-in-out",
          isOpen ? "translate-x-0" : "-translate-x-full rtl:translate-x-full",
        )}
      >
        <div className="p-4 border-b border-gray-800 flex items-center justify-between">
          <span className="font-bold text-lg">{{project_name}}</span>
          <Button variant="ghost" size="icon" onClick={onToggle} className="text-white hover:bg-gray-700">
            <X size={18} />
          </Button>
        </div>
        <nav className="flex-1 p-4 overflow-y-auto">
          <NavMenu items={navItems} pathname={location.pathname} isOpen />
        </nav>
      </aside>
    );
  }

  return (
    <aside
      className={cn(
        "hidden md:flex md:flex-col bg-gray-900 text-white border-e border-gray-800 transition-all duration-300",
        isOpen ? "w-72" : "w-20",
      )}
    >
      <div className={cn("p-4 border-b border-gray-800 flex items-center", isOpen ? "justify-between" : "justify-center")}>
        {isOpen && <span className="font-bold text-lg ms-2">{{project_name}}</span>}
        <Button variant="ghost" size="icon" onClick={onToggle} className="text-white hover:bg-gray-700">
          {isOpen ? <ChevronLeft size={18} /> : <ChevronRight size={18} />}
        </Button>
      </div>
      <nav className="flex-1 p-2 space-y-1 overflow-y-auto">
        <NavMenu items={navItems} pathname={location.pathname} isOpen={isOpen} />
      </nav>
    </aside>
  );
}
"#;

/// Top bar with page title, language, theme and logout controls
pub const HEADER: &str = r#"import { useLocation, useNavigate } from "react-router-dom";
import { LogOut, Menu } from "lucide-react";
import { Button } from "@/components/ui/button";
import { ModeToggle } from "@/components/mode-toggle";
import { LanguageSwitcher } from "@/components/LanguageSwitcher";
import { useAuth } from "@/context/AuthContext";

function formatPathname(pathname: string): string {
  if (pathname === "/") return "Dashboard";
  return pathname
    .split("/")
    .filter(Boolean)
    .filter((part) => !/^\d+$/.test(part))
    .map((part) => part.charAt(0).toUpperCase() + part.slice(1).replace(/-/g, " "))
    .join(" ");
}

interface HeaderProps {
  onMenuClick: () => void;
}

export default function Header({ onMenuClick }: HeaderProps) {
  const location = useLocation();
  const navigate = useNavigate();
  const { user, logout } = useAuth();

  const handleLogout = () => {
    logout();
    navigate("/login");
  };

  return (
    <header className="flex items-center justify-between p-4 border-b bg-card">
      <div className="flex items-center gap-4">
        <Button variant="ghost" size="icon" className="md:hidden" onClick={onMenuClick}>
          <Menu />
        </Button>
        <h1 className="text-xl font-semibold">{formatPathname(location.pathname)}</h1>
      </div>
      <div className="flex items-center gap-2">
        {user && <span className="hidden sm:inline text-sm text-muted-foreground">{user.username}</span>}
        <LanguageSwitcher />
        <ModeToggle />
        <Button variant="outline" size="icon" title="Log out" onClick={handleLogout}>
          <LogOut className="h-[1.2rem] w-[1.2rem]" />
        </Button>
      </div>
    </header>
  );
}
"#;

/// Landing page with one tile per model
pub const DASHBOARD: &str = r#"import React from "react";
import { Link } from "react-router-dom";
import {
{{#each icons}}
  {{this}},
{{/each}}
} from "lucide-react";

const iconMap: Record<string, React.ElementType> = {
{{#each icons}}
  {{this}},
{{/each}}
};

const dashboardItems = {{json dashboard_items}};

export default function Dashboard() {
  return (
    <div className="p-4 md:p-6">
      <div className="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6">
        {dashboardItems.map((item) => {
          const Icon = iconMap[item.icon] ?? LayoutGrid;
          return (
            <Link
              key={item.href}
              to={item.href}
              className="group flex flex-col items-center justify-center p-6 bg-card border rounded-xl shadow-sm hover:shadow-lg hover:-translate-y-1 transition-all duration-300"
            >
              <div className="p-4 bg-primary/10 rounded-full mb-4">
                <Icon className="h-8 w-8 text-primary" />
              </div>
              <h3 className="text-lg font-semibold text-foreground">{item.label}</h3>
            </Link>
          );
        })}
      </div>
    </div>
  );
}
"#;
